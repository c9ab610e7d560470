//! Static copy and catalog data for the landing page.
//!
//! Everything here is compile-time data. Nothing is mutated after startup,
//! so components borrow it as `&'static`.

#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub includes: &'static [&'static str],
    pub price: u32, // Whole euros
    pub badge: Option<&'static str>,
    pub cta: &'static str,
    pub image: &'static str,
}

impl Bundle {
    /// Badged bundles get the highlighted card and the primary button.
    pub fn is_featured(&self) -> bool {
        self.badge.is_some()
    }

    pub fn display_price(&self) -> String {
        format!("€{}", self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOption {
    Onyx,
    Navy,
    Grey,
    Green,
}

impl ColorOption {
    pub const ALL: [ColorOption; 4] = [
        ColorOption::Onyx,
        ColorOption::Navy,
        ColorOption::Grey,
        ColorOption::Green,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorOption::Onyx => "Onyx Black",
            ColorOption::Navy => "Arctic Navy",
            ColorOption::Grey => "Stone Grey",
            ColorOption::Green => "Forest Green",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorOption::Onyx => "#1a1a1a",
            ColorOption::Navy => "#1e3a8a",
            ColorOption::Grey => "#4b5563",
            ColorOption::Green => "#14532d",
        }
    }
}

impl Default for ColorOption {
    fn default() -> Self {
        ColorOption::ALL[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::XL];

    pub fn label(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::ALL[1]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub text: &'static str,
}

/// Title/description pair shared by feature cards, steps and guarantees.
#[derive(Debug, Clone, PartialEq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const BUNDLES: &[Bundle] = &[
    Bundle {
        id: "starter",
        name: "Starter",
        description: "For trying the fit and feel.",
        includes: &["1 ColdBoxers boxer brief", "1 cooling pad"],
        price: 39,
        badge: None,
        cta: "Get Starter",
        image: "3 medium.png",
    },
    Bundle {
        id: "sauna-set",
        name: "Sauna Set",
        description: "Built for real sauna routines and pad swapping.",
        includes: &["3 ColdBoxers boxer briefs", "3 cooling pads"],
        price: 100,
        badge: Some("Most Popular"),
        cta: "Get the 3 Pack",
        image: "4 medium.png",
    },
    Bundle {
        id: "rotation",
        name: "Rotation",
        description: "Your full weekly lineup. Always ready.",
        includes: &["5 ColdBoxers boxer briefs", "5 cooling pads"],
        price: 155,
        badge: Some("Best Value"),
        cta: "Get the 5 Pack",
        image: "5 medium.png",
    },
];

pub const HERO_IMAGE: &str = "1 medium.png";
pub const OUTCOME_IMAGE: &str = "2 medium.png";

pub const GALLERY_IMAGES: &[&str] = &[
    "6 medium.png",
    "7 medium.png",
    "8 medium.png",
    "9 medium.png",
    "10 medium.png",
    "11 medium.png",
    "12 medium.png",
    "13 medium.png",
    "14 medium.png",
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How cold is it?",
        answer: "Refreshing, not extreme. The pocket design helps keep cooling controlled and comfortable.",
    },
    FaqEntry {
        question: "How long does it last?",
        answer: "Each session is designed to deliver strong cooling for at least 20 minutes. Many customers go longer depending on conditions.",
    },
    FaqEntry {
        question: "When should I use it around the sauna?",
        answer: "Most men prefer after the hot room, or between rounds. It is a simple cooldown habit.",
    },
    FaqEntry {
        question: "Can I wear it every day?",
        answer: "Yes. Many customers use it daily, and add pads when they want cooling.",
    },
    FaqEntry {
        question: "How do I wash it?",
        answer: "Remove the pad. Machine wash cold. Air dry or tumble low. Pads wipe clean and are reusable.",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Verified Buyer",
        text: "Sauna nights feel different now. Simple, premium, and actually discreet.",
    },
    Review {
        author: "Verified Buyer",
        text: "Feels like high end underwear. The cooling pocket is genius.",
    },
    Review {
        author: "Verified Buyer",
        text: "Easy habit. I keep a few pads ready and just swap.",
    },
];

pub const REVIEW_STARS: usize = 5;

pub fn star_rating() -> String {
    "★".repeat(REVIEW_STARS)
}

/// Icon name (rendered as a glyph by the hero) and label.
pub const HERO_HIGHLIGHTS: &[(&str, &str)] = &[
    ("thermometer", "20 min cooling sessions"),
    ("refresh", "Swap pads in seconds"),
    ("wind", "Bamboo Lyocell comfort"),
    ("shield", "Tight, supportive fit"),
];

pub const OUTCOMES: &[Blurb] = &[
    Blurb {
        title: "Control the Heat",
        body: "Go to the sauna and still feel in control afterward. Build a routine that supports fertility without changing who you are.",
    },
    Blurb {
        title: "Future Proof",
        body: "ColdBoxers is made for men who want premium comfort now, and peace of mind later.",
    },
];

pub const FEATURES: &[Blurb] = &[
    Blurb {
        title: "Discreet Pocket",
        body: "Holds the pad securely without bulky outlines.",
    },
    Blurb {
        title: "Controlled Cooling",
        body: "Feel the difference for at least 20 minutes.",
    },
    Blurb {
        title: "Bamboo Lyocell",
        body: "Soft, breathable, and smooth on skin.",
    },
];

pub const STEPS: &[Blurb] = &[
    Blurb {
        title: "Chill",
        body: "Place the cooling pad in your freezer for 60 minutes.",
    },
    Blurb {
        title: "Insert",
        body: "Slide it into the front pocket. The pocket creates a comfortable barrier so it cools without harsh shock.",
    },
    Blurb {
        title: "Go",
        body: "Enjoy a cooling session for 20 minutes or more. Swap to a fresh pad when the first one warms up.",
    },
];

pub const ROUTINE_TIPS: &[&str] = &[
    "Pre chill your pads before you leave",
    "Use one pad after the hot room, or between rounds",
    "Swap pads every 20 minutes for longer sessions",
];

pub const GUARANTEES: &[Blurb] = &[
    Blurb {
        title: "30 day comfort guarantee.",
        body: "If the fit or feel is not right, return it within 30 days. Simple process. No awkward questions.",
    },
    Blurb {
        title: "Free shipping, always.",
        body: "Delivered in discreet packaging to your door.",
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Shop", href: "#bundles" },
    NavLink { name: "How it works", href: "#how-it-works" },
    NavLink { name: "Bundles", href: "#bundles" },
    NavLink { name: "FAQ", href: "#faq" },
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Shipping & Returns"];

pub const ANNOUNCEMENT: &str = "Free shipping. Discreet packaging. 30 day easy returns.";

// Section anchors used by buttons that scroll instead of linking.
pub const BUNDLES_ANCHOR: &str = "bundles";
pub const HOW_IT_WORKS_ANCHOR: &str = "how-it-works";
pub const FAQ_ANCHOR: &str = "faq";

/// Zero padded step number shown in the how-it-works circles.
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundles_are_well_formed() {
        let ids: HashSet<_> = BUNDLES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BUNDLES.len());
        for bundle in BUNDLES {
            assert!(!bundle.includes.is_empty(), "{} has no items", bundle.id);
        }
    }

    #[test]
    fn featured_bundles_are_the_badged_ones() {
        let featured: Vec<_> = BUNDLES.iter().filter(|b| b.is_featured()).map(|b| b.id).collect();
        assert_eq!(featured, vec!["sauna-set", "rotation"]);
        assert_eq!(BUNDLES[0].display_price(), "€39");
    }

    #[test]
    fn color_names_and_hexes_are_unique() {
        let names: HashSet<_> = ColorOption::ALL.iter().map(|c| c.name()).collect();
        let hexes: HashSet<_> = ColorOption::ALL.iter().map(|c| c.hex()).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(hexes.len(), 4);
        assert_eq!(ColorOption::default(), ColorOption::Onyx);
    }

    #[test]
    fn sizes_keep_display_order() {
        let labels: Vec<_> = Size::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["S", "M", "L", "XL"]);
        assert_eq!(Size::default().label(), "M");
    }

    #[test]
    fn nav_links_point_at_page_anchors() {
        let anchors = [BUNDLES_ANCHOR, HOW_IT_WORKS_ANCHOR, FAQ_ANCHOR];
        for link in NAV_LINKS {
            let target = link.href.trim_start_matches('#');
            assert!(anchors.contains(&target), "{} targets {}", link.name, link.href);
        }
    }

    #[test]
    fn reviews_show_five_stars() {
        assert_eq!(star_rating(), "★★★★★");
    }

    #[test]
    fn step_numbers_are_two_digits() {
        assert_eq!(step_number(0), "01");
        assert_eq!(step_number(2), "03");
    }
}
