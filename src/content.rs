// SPDX-License-Identifier: MPL-2.0
//! Static page content and layout model.
//!
//! This module is the single source of truth for what the page contains:
//! section copy, the reveal-group table (which animation kind and stagger
//! each group gets), stat targets, and portfolio items. It also computes the
//! absolute vertical bounds of every animated element, which is what the
//! visibility observer works against.
//!
//! All copy is fixed-locale English; there is no language switching.

use crate::engine::Bounds;
use crate::engine::reveal::AnimationKind;
use std::time::Duration;

/// Height of the fixed navigation bar; anchor jumps subtract this.
pub const NAVBAR_HEIGHT: f32 = 80.0;

/// Sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    Stats,
    Portfolio,
    Advantages,
    Timeline,
    Reviews,
    Pricing,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Stats,
        Section::Portfolio,
        Section::Advantages,
        Section::Timeline,
        Section::Reviews,
        Section::Pricing,
        Section::Team,
        Section::Contact,
    ];

    /// Logical height of the section's content block.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Hero => 640.0,
            Section::About => 520.0,
            Section::Services => 560.0,
            Section::Stats => 280.0,
            Section::Portfolio => 720.0,
            Section::Advantages => 420.0,
            Section::Timeline => 620.0,
            Section::Reviews => 420.0,
            Section::Pricing => 560.0,
            Section::Team => 460.0,
            Section::Contact => 640.0,
        }
    }

    /// Absolute offset of the section's top edge from the top of the page.
    #[must_use]
    pub fn top(self) -> f32 {
        Section::ALL
            .iter()
            .take_while(|s| **s != self)
            .map(|s| s.height())
            .sum()
    }

    /// Title shown in the navigation bar, if the section is linked there.
    #[must_use]
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("Home"),
            Section::About => Some("About"),
            Section::Services => Some("Services"),
            Section::Portfolio => Some("Portfolio"),
            Section::Pricing => Some("Pricing"),
            Section::Contact => Some("Contact"),
            _ => None,
        }
    }
}

/// Total scrollable height of the page.
#[must_use]
pub fn page_height() -> f32 {
    Section::ALL.iter().map(|s| s.height()).sum()
}

/// A group of same-kind animated elements (one selector group in the
/// original markup). Stagger delays reset per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    AboutText,
    AboutVisual,
    ServiceCard,
    StatNumber,
    PortfolioItem,
    PortfolioImage,
    AdvantageCard,
    TimelineItem,
    ReviewCard,
    PricingCard,
    TeamMember,
    ContactCard,
    ContactForm,
}

/// Identifies one animated element: its group plus its position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub group: Group,
    pub index: u16,
}

impl ElementId {
    #[must_use]
    pub fn new(group: Group, index: u16) -> Self {
        Self { group, index }
    }
}

/// One row of the reveal registration table.
#[derive(Debug, Clone, Copy)]
pub struct RevealGroup {
    pub group: Group,
    pub kind: AnimationKind,
    pub stagger: Duration,
    pub count: u16,
}

/// Reveal registration table.
///
/// Groups with an unspecified kind in the original markup fall back to the
/// base fade-up animation. `StatNumber` and `PortfolioImage` are absent on
/// purpose: they are observed for counting and lazy loading, not revealing.
pub const REVEAL_GROUPS: [RevealGroup; 11] = [
    reveal_group(Group::AboutText, AnimationKind::SlideLeft, 0, 1),
    reveal_group(Group::AboutVisual, AnimationKind::SlideRight, 0, 1),
    reveal_group(Group::ServiceCard, AnimationKind::Fade, 100, 6),
    reveal_group(Group::PortfolioItem, AnimationKind::Scale, 150, 6),
    reveal_group(Group::AdvantageCard, AnimationKind::Fade, 100, 4),
    reveal_group(Group::TimelineItem, AnimationKind::SlideLeft, 200, 4),
    reveal_group(Group::ReviewCard, AnimationKind::Fade, 150, 3),
    reveal_group(Group::PricingCard, AnimationKind::Scale, 200, 3),
    reveal_group(Group::TeamMember, AnimationKind::Fade, 100, 4),
    reveal_group(Group::ContactCard, AnimationKind::SlideLeft, 100, 1),
    reveal_group(Group::ContactForm, AnimationKind::SlideRight, 0, 1),
];

const fn reveal_group(group: Group, kind: AnimationKind, stagger_ms: u64, count: u16) -> RevealGroup {
    RevealGroup {
        group,
        kind,
        stagger: Duration::from_millis(stagger_ms),
        count,
    }
}

/// Grid placement parameters for a group: owning section, columns per row,
/// card height, vertical gap, and offset below the section top (heading
/// space).
struct Placement {
    section: Section,
    columns: u16,
    card_height: f32,
    gap: f32,
    header: f32,
}

fn placement(group: Group) -> Placement {
    match group {
        Group::AboutText => Placement {
            section: Section::About,
            columns: 2,
            card_height: 360.0,
            gap: 0.0,
            header: 120.0,
        },
        // Second column of the about section, same row as the text block.
        Group::AboutVisual => Placement {
            section: Section::About,
            columns: 2,
            card_height: 360.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::ServiceCard => Placement {
            section: Section::Services,
            columns: 3,
            card_height: 180.0,
            gap: 24.0,
            header: 120.0,
        },
        Group::StatNumber => Placement {
            section: Section::Stats,
            columns: 4,
            card_height: 120.0,
            gap: 0.0,
            header: 80.0,
        },
        Group::PortfolioItem | Group::PortfolioImage => Placement {
            section: Section::Portfolio,
            columns: 3,
            card_height: 240.0,
            gap: 24.0,
            header: 140.0,
        },
        Group::AdvantageCard => Placement {
            section: Section::Advantages,
            columns: 4,
            card_height: 220.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::TimelineItem => Placement {
            section: Section::Timeline,
            columns: 1,
            card_height: 96.0,
            gap: 24.0,
            header: 120.0,
        },
        Group::ReviewCard => Placement {
            section: Section::Reviews,
            columns: 3,
            card_height: 220.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::PricingCard => Placement {
            section: Section::Pricing,
            columns: 3,
            card_height: 360.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::TeamMember => Placement {
            section: Section::Team,
            columns: 4,
            card_height: 260.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::ContactCard => Placement {
            section: Section::Contact,
            columns: 2,
            card_height: 420.0,
            gap: 0.0,
            header: 120.0,
        },
        Group::ContactForm => Placement {
            section: Section::Contact,
            columns: 2,
            card_height: 420.0,
            gap: 0.0,
            header: 120.0,
        },
    }
}

/// Absolute vertical bounds of an animated element, derived from the static
/// grid layout of its group.
#[must_use]
pub fn element_bounds(id: ElementId) -> Bounds {
    let p = placement(id.group);
    let row = f32::from(id.index / p.columns);
    let top = p.section.top() + p.header + row * (p.card_height + p.gap);
    Bounds::new(top, p.card_height)
}

/// All elements of a group, paired with their bounds, ready for observer
/// registration.
#[must_use]
pub fn group_elements(group: Group, count: u16) -> Vec<(ElementId, Bounds)> {
    (0..count)
        .map(|i| {
            let id = ElementId::new(group, i);
            (id, element_bounds(id))
        })
        .collect()
}

// ============================================================================
// Page copy
// ============================================================================

pub const STUDIO_NAME: &str = "Meridian Finish Studio";
pub const HERO_TITLE: &str = "Surfaces that tell a story";
pub const HERO_SUBTITLE: &str =
    "Architectural coating and decorative finishes for spaces that deserve better than flat white.";
pub const HERO_CTA: &str = "Request a quote";

pub const ABOUT_TITLE: &str = "About the studio";
pub const ABOUT_TEXT: &str = "Founded in a one-car garage with two spray guns and a stubborn \
streak, Meridian has grown into a full-service finishing studio. We handle everything from \
heritage restorations to high-gloss contemporary interiors, and we still mix every base coat \
by hand.";

pub const SERVICES_TITLE: &str = "What we do";

/// Service cards: title and blurb.
pub const SERVICES: [(&str, &str); 6] = [
    ("Interior finishes", "Walls, ceilings, and trim in any sheen you can imagine."),
    ("Exterior coating", "Weather-proof systems rated for twenty seasons."),
    ("Furniture lacquer", "Factory-grade lacquer work for joinery and cabinetry."),
    ("Decorative plaster", "Venetian, tadelakt, and limewash applications."),
    ("Color consulting", "On-site palettes matched to light and architecture."),
    ("Restoration", "Careful recovery of heritage surfaces and mouldings."),
];

pub const STATS_TITLE: &str = "The studio in numbers";

/// Stat cards: label plus the raw counter target as authored in the content.
/// The counter animator parses the target itself and ignores entries it
/// cannot parse, so these stay strings on purpose.
pub const STATS: [(&str, &str); 4] = [
    ("Projects completed", "250"),
    ("Years of experience", "12"),
    ("Happy clients", "180"),
    ("Specialists on staff", "15"),
];

pub const PORTFOLIO_TITLE: &str = "Selected work";

/// Portfolio filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Interior,
    Exterior,
    Furniture,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Interior, Category::Exterior, Category::Furniture];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Interior => "Interior",
            Category::Exterior => "Exterior",
            Category::Furniture => "Furniture",
        }
    }
}

/// One portfolio entry: title, category, and the thumbnail loaded lazily
/// when the item first scrolls into view.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioEntry {
    pub title: &'static str,
    pub category: Category,
    pub image_path: &'static str,
}

pub const PORTFOLIO: [PortfolioEntry; 6] = [
    PortfolioEntry {
        title: "Loft on Harrow Lane",
        category: Category::Interior,
        image_path: "assets/portfolio/harrow-loft.jpg",
    },
    PortfolioEntry {
        title: "Seafront villa facade",
        category: Category::Exterior,
        image_path: "assets/portfolio/seafront-villa.jpg",
    },
    PortfolioEntry {
        title: "Walnut credenza, piano gloss",
        category: Category::Furniture,
        image_path: "assets/portfolio/walnut-credenza.jpg",
    },
    PortfolioEntry {
        title: "Gallery limewash",
        category: Category::Interior,
        image_path: "assets/portfolio/gallery-limewash.jpg",
    },
    PortfolioEntry {
        title: "Schoolhouse brickwork",
        category: Category::Exterior,
        image_path: "assets/portfolio/schoolhouse.jpg",
    },
    PortfolioEntry {
        title: "Oak dining set",
        category: Category::Furniture,
        image_path: "assets/portfolio/oak-dining.jpg",
    },
];

pub const ADVANTAGES_TITLE: &str = "Why clients stay";

pub const ADVANTAGES: [(&str, &str); 4] = [
    ("Dust-free process", "Negative-pressure containment on every interior job."),
    ("Fixed quotes", "The number we give you is the number you pay."),
    ("Five-year warranty", "Every coating system is covered, no small print."),
    ("Own crew", "No subcontractors; the people who quote are the people who paint."),
];

pub const TIMELINE_TITLE: &str = "How a project runs";

pub const TIMELINE: [(&str, &str); 4] = [
    ("Week 1", "Site visit, substrate testing, and a written scope."),
    ("Week 2", "Sample boards and color sign-off."),
    ("Weeks 3-5", "Preparation and application, documented daily."),
    ("Final week", "Curing checks, touch-ups, and handover."),
];

pub const REVIEWS_TITLE: &str = "Client words";

pub const REVIEWS: [(&str, &str); 3] = [
    ("Hanna K.", "They treated our 1910 stairwell like a museum piece."),
    ("Tom E.", "On time, on budget, and the finish is glass."),
    ("Priya S.", "The color consult alone was worth the call."),
];

pub const PRICING_TITLE: &str = "Packages";

pub const PRICING: [(&str, &str, &str); 3] = [
    ("Refresh", "from $1,800", "Single-room repaint with full preparation."),
    ("Signature", "from $6,500", "Whole-floor finishes with decorative accents."),
    ("Bespoke", "by quote", "Restorations, lacquer work, and special systems."),
];

pub const TEAM_TITLE: &str = "The crew";

pub const TEAM: [(&str, &str); 4] = [
    ("Mara Lindqvist", "Founder, master finisher"),
    ("Deniz Aydin", "Site lead"),
    ("Joel Mbeki", "Lacquer specialist"),
    ("Rosa Ferreira", "Color consultant"),
];

pub const CONTACT_TITLE: &str = "Start a project";
pub const CONTACT_BLURB: &str =
    "Tell us about the space and we will come back within one business day.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_the_page() {
        let mut expected_top = 0.0;
        for section in Section::ALL {
            assert_eq!(section.top(), expected_top);
            expected_top += section.height();
        }
        assert_eq!(page_height(), expected_top);
    }

    #[test]
    fn reveal_table_matches_content_counts() {
        for group in REVEAL_GROUPS {
            let expected = match group.group {
                Group::ServiceCard => SERVICES.len(),
                Group::PortfolioItem => PORTFOLIO.len(),
                Group::AdvantageCard => ADVANTAGES.len(),
                Group::TimelineItem => TIMELINE.len(),
                Group::ReviewCard => REVIEWS.len(),
                Group::PricingCard => PRICING.len(),
                Group::TeamMember => TEAM.len(),
                Group::AboutText | Group::AboutVisual | Group::ContactCard | Group::ContactForm => 1,
                Group::StatNumber | Group::PortfolioImage => 0,
            };
            assert_eq!(usize::from(group.count), expected, "{:?}", group.group);
        }
    }

    #[test]
    fn grid_rows_advance_bounds() {
        // Six portfolio items in three columns: indices 0-2 share a row,
        // 3-5 sit one card lower.
        let first = element_bounds(ElementId::new(Group::PortfolioItem, 0));
        let second = element_bounds(ElementId::new(Group::PortfolioItem, 2));
        let below = element_bounds(ElementId::new(Group::PortfolioItem, 3));
        assert_eq!(first, second);
        assert!(below.top > first.top);
    }

    #[test]
    fn element_bounds_sit_inside_their_section() {
        for group in REVEAL_GROUPS {
            for (id, bounds) in group_elements(group.group, group.count) {
                let section = placement(id.group).section;
                assert!(bounds.top >= section.top(), "{:?}", id);
                assert!(
                    bounds.bottom() <= section.top() + section.height(),
                    "{:?} overflows {:?}",
                    id,
                    section
                );
            }
        }
    }

    #[test]
    fn stat_targets_parse_as_integers() {
        for (label, raw) in STATS {
            assert!(raw.parse::<u64>().is_ok(), "{label}: {raw}");
        }
    }
}
