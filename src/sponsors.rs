//! Static sponsor content for the landing page.
//!
//! The sponsor list is ordered, read-only data supplied to the UI; rendering
//! it must never reorder or duplicate entries.

use once_cell::sync::Lazy;

/// Closed set of outbound link categories a sponsor card can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Instagram,
    GoogleMaps,
}

impl LinkKind {
    /// Short label used for tooltips and accessibility text.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Instagram => "Instagram",
            LinkKind::GoogleMaps => "Google Maps",
        }
    }
}

/// A single outbound link on a sponsor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SponsorLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

/// A partner sponsor: display name plus one or more outbound links.
#[derive(Debug, Clone, Copy)]
pub struct Sponsor {
    pub name: &'static str,
    pub links: &'static [SponsorLink],
}

impl Sponsor {
    /// Target URLs of this sponsor's links, in declaration order.
    pub fn link_targets(&self) -> Vec<&'static str> {
        self.links.iter().map(|l| l.url).collect()
    }
}

/// The partner sponsors shown on the landing page, in display order.
pub static SPONSORS: Lazy<Vec<Sponsor>> = Lazy::new(|| {
    vec![
        Sponsor {
            name: "Stitchntime",
            links: &[SponsorLink {
                kind: LinkKind::Instagram,
                url: "https://www.instagram.com/stichentime",
            }],
        },
        Sponsor {
            name: "Temptations",
            links: &[SponsorLink {
                kind: LinkKind::Instagram,
                url: "https://www.instagram.com/temptations.thebakehouse",
            }],
        },
        Sponsor {
            name: "Capital Pizza",
            links: &[SponsorLink {
                kind: LinkKind::Instagram,
                url: "https://www.instagram.com/capitalpizza.pk",
            }],
        },
        Sponsor {
            name: "Bites Islamabad",
            links: &[
                SponsorLink {
                    kind: LinkKind::Instagram,
                    url: "https://www.instagram.com/bites.isb",
                },
                SponsorLink {
                    kind: LinkKind::GoogleMaps,
                    url: "https://www.google.com/maps/place/Bites+Cafe/@33.6682548,72.9983727,17z/data=!4m8!3m7!1s0x38df9528905bc43d:0x2fff4d73c37caaa5!8m2!3d33.6682548!4d72.9983727!9m1!1b1!16s%2Fg%2F11m59nc_zv?hl=en&entry=ttu&g_ep=EgoyMDI1MTAxNC4wIKXMDSoASAFQAw%3D%3D",
                },
            ],
        },
        Sponsor {
            name: "Alfusas",
            links: &[SponsorLink {
                kind: LinkKind::Instagram,
                url: "https://www.instagram.com/alfusas.pk",
            }],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sponsor_list_is_stable_across_reads() {
        let first: Vec<&str> = SPONSORS.iter().map(|s| s.name).collect();
        let second: Vec<&str> = SPONSORS.iter().map(|s| s.name).collect();
        assert_eq!(first, second);

        let first_links: Vec<Vec<&str>> = SPONSORS.iter().map(|s| s.link_targets()).collect();
        let second_links: Vec<Vec<&str>> = SPONSORS.iter().map(|s| s.link_targets()).collect();
        assert_eq!(first_links, second_links);
    }

    #[test]
    fn no_duplicate_names_or_targets() {
        let names: HashSet<&str> = SPONSORS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SPONSORS.len());

        let targets: Vec<&str> = SPONSORS.iter().flat_map(|s| s.link_targets()).collect();
        let unique: HashSet<&str> = targets.iter().copied().collect();
        assert_eq!(unique.len(), targets.len());
    }

    #[test]
    fn maps_links_keep_their_place_data() {
        // Google Maps place links need the `/data=` segment to land on the
        // business listing rather than a bare coordinate pin.
        for sponsor in SPONSORS.iter() {
            for link in sponsor.links {
                if matches!(link.kind, LinkKind::GoogleMaps) {
                    assert!(
                        link.url.contains("/data="),
                        "{} maps link is missing its place data: {}",
                        sponsor.name,
                        link.url
                    );
                }
            }
        }
    }

    #[test]
    fn every_sponsor_has_at_least_one_link() {
        for sponsor in SPONSORS.iter() {
            assert!(!sponsor.links.is_empty(), "{} has no links", sponsor.name);
            for link in sponsor.links {
                assert!(link.url.starts_with("https://"), "{}", link.url);
            }
        }
    }
}
