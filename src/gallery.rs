use crate::stagger::animation_delay;

/// A static image served from `public/`, with its intrinsic size so the
/// browser can reserve layout space before it loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub name: &'static str,
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
}

pub static GALLERY: [GalleryImage; 5] = [
    GalleryImage {
        name: "alviso",
        src: "/images/home/alviso.jpg",
        width: 1440,
        height: 1600,
    },
    GalleryImage {
        name: "sedona",
        src: "/images/home/sedona.jpg",
        width: 1440,
        height: 1600,
    },
    GalleryImage {
        name: "photography",
        src: "/images/home/photography.jpg",
        width: 1440,
        height: 1600,
    },
    GalleryImage {
        name: "oregon",
        src: "/images/home/oregon.jpg",
        width: 1440,
        height: 1600,
    },
    GalleryImage {
        name: "chicago1",
        src: "/images/home/chicago.jpg",
        width: 1440,
        height: 1600,
    },
];

pub const ROTATIONS: [&str; 5] = ["rotate-2", "-rotate-2", "rotate-2", "rotate-2", "-rotate-2"];

/// Tiles render at 11rem, or 18rem from the `sm` breakpoint up.
pub const GALLERY_SIZES: &str = "(min-width: 640px) 18rem, 11rem";

/// Rotation class for the tile at `index`. Wraps around when there are more
/// images than rotations.
pub fn rotation_for(index: usize) -> &'static str {
    ROTATIONS[index % ROTATIONS.len()]
}

pub fn alt_text(index: usize) -> String {
    format!("Home page gallery image {index}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub image: GalleryImage,
    pub rotation: &'static str,
    pub delay: String,
}

pub fn tiles() -> impl Iterator<Item = Tile> {
    GALLERY.iter().enumerate().map(|(index, image)| Tile {
        index,
        image: *image,
        rotation: rotation_for(index),
        delay: animation_delay(index),
    })
}
