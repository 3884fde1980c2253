use leptos::{either::Either, prelude::*};
use leptos_meta::{Link, Meta, Title};

use super::components::{Container, Entrance, HoverSocialLink, JsonLd, LinkedText};
use crate::config::SiteConfig;
use crate::gallery::{alt_text, tiles, GALLERY_SIZES};
use crate::profile::{IntroSegment, AVATAR_ALT, AVATAR_PATH, AVATAR_SIZE, DESCRIPTION, INTRO, NAME};
use crate::seo::StructuredData;
use crate::socials::SOCIAL_LINKS;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = SiteConfig::load();
    let structured_data = StructuredData::for_site(&config);

    view! {
        <Title text="Software Engineer" />
        <Meta name="description" content=DESCRIPTION />
        <Link rel="canonical" href=config.site_url />
        <JsonLd data=structured_data />
        <HomeContent />
    }
}

#[component]
pub fn HomeContent() -> impl IntoView {
    view! {
        <Container class="mt-9">
            <div class="max-w-2xl">
                <HiddenAvatar />
                <Entrance>
                    <h1 class="text-4xl font-bold tracking-tight text-zinc-800 dark:text-zinc-100 sm:text-5xl">
                        {NAME}
                    </h1>
                </Entrance>
                <Entrance>
                    <p class="mt-6 text-base text-zinc-600 dark:text-zinc-400">
                        <Intro />
                    </p>
                </Entrance>
                <SocialRow />
            </div>
        </Container>
        <Photos />
    }
}

/// Never shown; lets crawlers discover the avatar referenced by the JSON-LD.
#[component]
fn HiddenAvatar() -> impl IntoView {
    view! {
        <div style="display: none">
            <img
                src=AVATAR_PATH
                alt=AVATAR_ALT
                width=AVATAR_SIZE.to_string()
                height=AVATAR_SIZE.to_string()
            />
        </div>
    }
}

#[component]
fn Intro() -> impl IntoView {
    INTRO
        .iter()
        .map(|segment| match *segment {
            IntroSegment::Text(text) => Either::Left(text),
            IntroSegment::Link { text, href } => {
                Either::Right(view! { <LinkedText text href /> })
            }
        })
        .collect_view()
}

#[component]
pub fn SocialRow() -> impl IntoView {
    view! {
        <div class="mt-6 flex gap-6">
            {SOCIAL_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    view! {
                        <Entrance index>
                            <HoverSocialLink
                                href=link.href
                                aria_label=link.aria_label
                                icon=link.icon
                                label=link.label
                                new_tab=link.opens_new_tab()
                            />
                        </Entrance>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Photos() -> impl IntoView {
    view! {
        <div class="mt-16 sm:mt-20">
            <div class="-my-4 flex justify-center gap-5 overflow-hidden py-4 sm:gap-8">
                {tiles()
                    .map(|tile| {
                        // animate the wrapper, the animation transform would replace the rotation
                        view! {
                            <Entrance index=tile.index>
                                <div class=format!(
                                    "relative aspect-[9/10] w-44 flex-none overflow-hidden rounded-xl bg-zinc-100 dark:bg-zinc-800 sm:w-72 sm:rounded-2xl {}",
                                    tile.rotation,
                                )>
                                    <img
                                        src=tile.image.src
                                        alt=alt_text(tile.index)
                                        width=tile.image.width.to_string()
                                        height=tile.image.height.to_string()
                                        sizes=GALLERY_SIZES
                                        loading="lazy"
                                        decoding="async"
                                        class="absolute inset-0 h-full w-full object-cover"
                                    />
                                </div>
                            </Entrance>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    use futures::{stream, StreamExt};
    use leptos_meta::{provide_meta_context, ServerMetaContext};

    use crate::gallery::{GALLERY, ROTATIONS};

    fn render<V: IntoView>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    // Helper asserting each needle appears after the previous one
    fn assert_in_order(html: &str, needles: &[&str]) {
        let mut pos = 0;
        for needle in needles {
            match html[pos..].find(needle) {
                Some(i) => pos += i + needle.len(),
                None => panic!("{needle:?} not found in order in {html}"),
            }
        }
    }

    #[test]
    fn test_social_row() {
        let html = render(|| view! { <SocialRow /> });

        assert_eq!(html.matches("<a ").count(), 4);
        assert_in_order(
            &html,
            &[
                "https://www.linkedin.com/in/youngbryanyu/",
                "LinkedIn",
                "https://github.com/youngbryanyu",
                "GitHub",
                "mailto:youngyu19@gmail.com",
                "Email",
                "https://drive.google.com/file/d/",
                "Resume",
            ],
        );
        assert!(html.contains(r#"aria-label="Connect on LinkedIn""#));
        assert!(html.contains(r#"aria-label="Connect through email""#));
        // only the three web links open a new tab
        assert_eq!(html.matches(r#"target="_blank""#).count(), 3);
    }

    #[test]
    fn test_social_row_is_staggered() {
        let html = render(|| view! { <SocialRow /> });

        assert_eq!(html.matches("animate__fadeInUp").count(), 4);
        assert_in_order(
            &html,
            &[
                "animation-delay: 0s",
                "animation-delay: 0.1s",
                "animation-delay: 0.2s",
                "animation-delay: 0.3s",
            ],
        );
    }

    #[test]
    fn test_photos() {
        let html = render(|| view! { <Photos /> });

        assert_eq!(html.matches("<img").count(), 5);
        let srcs = GALLERY.iter().map(|i| i.src).collect::<Vec<_>>();
        assert_eq!(
            srcs,
            vec![
                "/images/home/alviso.jpg",
                "/images/home/sedona.jpg",
                "/images/home/photography.jpg",
                "/images/home/oregon.jpg",
                "/images/home/chicago.jpg",
            ]
        );
        assert_in_order(&html, &srcs);
        assert_in_order(
            &html,
            &[
                "Home page gallery image 0",
                "Home page gallery image 1",
                "Home page gallery image 2",
                "Home page gallery image 3",
                "Home page gallery image 4",
            ],
        );
        assert_eq!(html.matches(GALLERY_SIZES).count(), 5);
    }

    #[test]
    fn test_photos_rotation_and_delay_per_tile() {
        let html = render(|| view! { <Photos /> });

        let mut needles = Vec::new();
        for (i, rotation) in ROTATIONS.iter().enumerate() {
            needles.push(format!("animation-delay: {}", crate::stagger::animation_delay(i)));
            needles.push(format!("sm:rounded-2xl {rotation}\""));
            needles.push(GALLERY[i].src.to_string());
        }
        let needles = needles.iter().map(String::as_str).collect::<Vec<_>>();
        // the delay sits on the wrapper, the rotation on the element inside it
        assert_in_order(&html, &needles);
    }

    #[test]
    fn test_home_content_sections_in_order() {
        let html = render(|| view! { <HomeContent /> });

        assert_in_order(
            &html,
            &[
                "display: none",
                AVATAR_PATH,
                "<h1",
                NAME,
                "</h1>",
                "<p",
                "https://www.purdue.edu",
                "Purdue University",
                "https://www.keybyte.xyz",
                "KeyByte LLC",
                "</p>",
                "Connect on LinkedIn",
                "Resume",
                "/images/home/alviso.jpg",
                "/images/home/chicago.jpg",
            ],
        );
        // hidden avatar + 5 gallery tiles
        assert_eq!(html.matches("<img").count(), 6);
        // two intro links + four social links
        assert_eq!(html.matches("<a ").count(), 6);
    }

    #[test]
    fn test_hidden_avatar() {
        let html = render(|| view! { <HiddenAvatar /> });

        assert!(html.contains(r#"style="display: none;""#));
        assert!(html.contains(r#"alt="Young Bryan Yu Avatar""#));
        assert!(html.contains(r#"width="200""#));
        assert!(html.contains(r#"height="200""#));
    }

    #[tokio::test]
    async fn test_head_carries_structured_data() {
        let owner = Owner::new();
        let (meta_context, meta_output) = ServerMetaContext::new();
        let body = owner.with(|| {
            provide_meta_context();
            provide_context(meta_context);
            view! { <HomePage /> }.to_html()
        });

        let document = format!("<!DOCTYPE html><html><head></head><body>{body}</body></html>");
        let html = meta_output
            .inject_meta_context(stream::iter([document]))
            .await
            .collect::<Vec<_>>()
            .await
            .concat();
        let head_end = html.find("</head>").expect("document should keep its head");
        let head = &html[..head_end];

        let site_url = SiteConfig::load().site_url;
        assert!(head.contains(r#"<script type="application/ld+json">"#));
        assert!(head.contains(r#""@type":"WebPage""#));
        assert!(head.contains(&format!(r#""url":"{site_url}""#)));
        assert!(head.contains(&format!(r#""image":"{site_url}/images/avatar.jpg""#)));
        assert!(head.contains(r#"rel="canonical""#));
        assert!(head.contains(&format!(r#"href="{site_url}""#)));
        assert!(head.contains(r#"name="description""#));

        // the structured data stays out of the page body
        assert!(!html[head_end..].contains("application/ld+json"));
    }
}
