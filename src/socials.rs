/// Glyphs available for social links, backed by the Font Awesome stylesheet
/// loaded in the document shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
    Email,
    Resume,
}

impl SocialIcon {
    pub fn class(&self) -> &'static str {
        match self {
            Self::LinkedIn => "fa-brands fa-linkedin",
            Self::GitHub => "fa-brands fa-github",
            Self::Email => "fa-solid fa-envelope",
            Self::Resume => "fa-solid fa-file-lines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    pub aria_label: &'static str,
    pub icon: SocialIcon,
    pub label: &'static str,
}

impl SocialLink {
    /// `mailto:` links hand off to the mail client, everything else opens
    /// in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        href: "https://www.linkedin.com/in/youngbryanyu/",
        aria_label: "Connect on LinkedIn",
        icon: SocialIcon::LinkedIn,
        label: "LinkedIn",
    },
    SocialLink {
        href: "https://github.com/youngbryanyu",
        aria_label: "Connect on GitHub",
        icon: SocialIcon::GitHub,
        label: "GitHub",
    },
    SocialLink {
        href: "mailto:youngyu19@gmail.com",
        aria_label: "Connect through email",
        icon: SocialIcon::Email,
        label: "Email",
    },
    SocialLink {
        href: "https://drive.google.com/file/d/1p-FvixBI4vU1n9HNTT0J_pcvMgQ7EQg-/view?usp=sharing",
        aria_label: "Resume",
        icon: SocialIcon::Resume,
        label: "Resume",
    },
];
