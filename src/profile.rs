pub const NAME: &str = "Young Bryan Yu";

/// Served from `public/`; also the image search engines pick up via JSON-LD.
pub const AVATAR_PATH: &str = "/images/avatar.jpg";
pub const AVATAR_ALT: &str = "Young Bryan Yu Avatar";
pub const AVATAR_SIZE: u32 = 200;

pub const DESCRIPTION: &str = "Software engineer based in Silicon Valley interested in distributed systems, databases, and cloud computing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroSegment {
    Text(&'static str),
    Link {
        text: &'static str,
        href: &'static str,
    },
}

pub const INTRO: &[IntroSegment] = &[
    IntroSegment::Text(
        "I'm Young, a software engineer based in Silicon Valley who is interested in distributed systems, databases, and cloud computing. I'm currently pursuing a MS in Computer Science at ",
    ),
    IntroSegment::Link {
        text: "Purdue University",
        href: "https://www.purdue.edu",
    },
    IntroSegment::Text(". I'm currently working at startup "),
    IntroSegment::Link {
        text: "KeyByte LLC",
        href: "https://www.keybyte.xyz",
    },
    IntroSegment::Text(" on some cutting edge database and VM tuning technologies."),
];

/// The `(text, href)` pairs linked from the introduction, in reading order.
pub fn intro_links() -> impl Iterator<Item = (&'static str, &'static str)> {
    INTRO.iter().filter_map(|segment| match segment {
        IntroSegment::Link { text, href } => Some((*text, *href)),
        IntroSegment::Text(_) => None,
    })
}
