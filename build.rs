fn main() {
    // The canonical site URL is baked in at compile time so the server
    // render and the hydrated client emit identical structured data.
    println!("cargo:rerun-if-env-changed=SITE_URL");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
