use std::collections::BTreeSet;
use std::fmt;

/// A single question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A titled group of FAQ entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

/// Position of an entry in the catalog: category index plus question index
/// within that category. Unique for any catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaqId {
    pub category: usize,
    pub question: usize,
}

impl FaqId {
    pub const fn new(category: usize, question: usize) -> Self {
        Self { category, question }
    }

    /// Element id used for the entry's DOM node, e.g. `faq-1-2`.
    pub fn anchor(&self) -> String {
        format!("faq-{}-{}", self.category, self.question)
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.question)
    }
}

/// Iterate a catalog in display order, pairing each entry with its id.
pub fn entries(categories: &[FaqCategory]) -> impl Iterator<Item = (FaqId, &FaqEntry)> + '_ {
    categories.iter().enumerate().flat_map(|(ci, category)| {
        category
            .entries
            .iter()
            .enumerate()
            .map(move |(qi, entry)| (FaqId::new(ci, qi), entry))
    })
}

/// Id of the first entry in display order, skipping empty categories.
pub fn first_id(categories: &[FaqCategory]) -> Option<FaqId> {
    entries(categories).next().map(|(id, _)| id)
}

/// Which FAQ answers are currently shown.
///
/// Every entry is independently open or closed; the only transition is
/// [`toggle`](Self::toggle). Nothing is persisted, a fresh page load starts
/// again from [`for_catalog`](Self::for_catalog).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedItems {
    open: BTreeSet<FaqId>,
}

impl ExpandedItems {
    /// Initial state for a catalog: only its first entry is open.
    pub fn for_catalog(categories: &[FaqCategory]) -> Self {
        Self {
            open: first_id(categories).into_iter().collect(),
        }
    }

    /// Open `id` if it is closed, close it if it is open.
    ///
    /// Ids that match no entry are accepted and simply never render.
    pub fn toggle(&mut self, id: FaqId) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    pub fn is_expanded(&self, id: FaqId) -> bool {
        self.open.contains(&id)
    }

    pub fn expanded_count(&self) -> usize {
        self.open.len()
    }
}

macro_rules! faq {
    ($question:expr => $answer:expr) => {
        FaqEntry {
            question: $question,
            answer: $answer,
        }
    };
}

pub static FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "Service & Uptime",
        entries: &[
            faq!("What is your uptime guarantee?" =>
                "We provide a 99.9% uptime guarantee for all our hosting services. This is backed by our Service Level Agreement (SLA) and robust infrastructure monitoring."),
            faq!("Where are your servers located?" =>
                "Our hosting machines are currently located in the UK. We have plans for global expansion to provide better latency for players worldwide."),
            faq!("What happens if my server goes down?" =>
                "Our monitoring systems detect issues immediately and our technical team works to resolve problems as quickly as possible. Any downtime that affects our SLA commitment may be eligible for service credits."),
        ],
    },
    FaqCategory {
        title: "Billing & Setup",
        entries: &[
            faq!("Do you charge for server setup?" =>
                "No, we provide free server setup and configuration for all supported games. There are no hidden setup fees or installation charges."),
            faq!("What payment methods do you accept?" =>
                "We accept all major credit cards, PayPal, and other secure payment methods. Billing details can be managed through your dashboard."),
            faq!("Can I get a refund if I'm not satisfied?" =>
                "Yes, we offer refunds in accordance with our refund policy outlined in our Terms & Policies. Contact our support team to discuss your specific situation."),
        ],
    },
    FaqCategory {
        title: "Game Server Support",
        entries: &[
            faq!("Which games do you support?" =>
                "We support a wide variety of popular games including Minecraft, ARK, Rust, CS2, and many others. Contact our support team if you have questions about a specific game."),
            faq!("Can I install custom mods or plugins?" =>
                "Yes, you have full control over your game server and can install mods, plugins, and custom configurations as needed for your specific game."),
            faq!("How do I access my server files?" =>
                "You can access your server files through our control panel at panel.acenodes.co.uk, which provides FTP access and a web-based file manager."),
        ],
    },
    FaqCategory {
        title: "Support & Contact",
        entries: &[
            faq!("How can I contact support?" =>
                "Our support team is available 24/7 through the support system in your dashboard. You can also reach us through our contact page for non-urgent inquiries."),
            faq!("What is your support response time?" =>
                "Critical issues receive a response within 1 hour, while non-critical issues are typically addressed within 24 hours. Our team works around the clock to assist you."),
            faq!("Do you offer Discord support?" =>
                "Yes, we have a Discord server for community support, announcements, and direct interaction with our team and other users. Join us at discord.acenodes.co.uk for real-time assistance and community discussions."),
        ],
    },
    FaqCategory {
        title: "Technical Questions",
        entries: &[
            faq!("Can I upgrade my server resources?" =>
                "Yes, you can upgrade your server's CPU, RAM, and storage at any time through your dashboard. Upgrades typically take effect immediately."),
            faq!("Do you provide DDoS protection?" =>
                "Yes, all our servers include DDoS protection to keep your game servers online and accessible to your players."),
            faq!("Can I have multiple game servers?" =>
                "Absolutely! You can deploy and manage multiple game servers from your dashboard, each with its own configuration and settings."),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const Q: FaqEntry = FaqEntry {
        question: "q",
        answer: "a",
    };

    static THREE_BY_THREE: &[FaqCategory] = &[
        FaqCategory { title: "A", entries: &[Q, Q, Q] },
        FaqCategory { title: "B", entries: &[Q, Q, Q] },
        FaqCategory { title: "C", entries: &[Q, Q, Q] },
    ];

    fn all_ids(categories: &[FaqCategory]) -> Vec<FaqId> {
        entries(categories).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_initial_state_opens_only_first_entry() {
        let state = ExpandedItems::for_catalog(FAQ_CATEGORIES);
        let ids = all_ids(FAQ_CATEGORIES);
        assert_eq!(ids.len(), 15);
        assert!(state.is_expanded(ids[0]));
        assert!(ids[1..].iter().all(|id| !state.is_expanded(*id)));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_every_entry() {
        for id in all_ids(FAQ_CATEGORIES) {
            let initial = ExpandedItems::for_catalog(FAQ_CATEGORIES);
            let mut state = initial.clone();

            state.toggle(id);
            assert_ne!(state.is_expanded(id), initial.is_expanded(id), "{id}");

            state.toggle(id);
            assert_eq!(state, initial, "{id}");
        }
    }

    #[test]
    fn test_toggle_leaves_other_entries_alone() {
        let ids = all_ids(FAQ_CATEGORIES);
        for a in &ids {
            let mut state = ExpandedItems::for_catalog(FAQ_CATEGORIES);
            let before: Vec<bool> = ids.iter().map(|id| state.is_expanded(*id)).collect();
            state.toggle(*a);
            for (b, was) in ids.iter().zip(before) {
                if b != a {
                    assert_eq!(state.is_expanded(*b), was, "toggling {a} changed {b}");
                }
            }
        }
    }

    #[test]
    fn test_three_by_three_example() {
        let ids = all_ids(THREE_BY_THREE);
        assert_eq!(ids[0], FaqId::new(0, 0));
        assert_eq!(ids[5], FaqId::new(1, 2));
        assert_eq!(ids[5].anchor(), "faq-1-2");

        let mut state = ExpandedItems::for_catalog(THREE_BY_THREE);
        let target = FaqId::new(1, 2);
        assert!(!state.is_expanded(target));
        state.toggle(target);
        assert!(state.is_expanded(target));
        state.toggle(target);
        assert!(!state.is_expanded(target));
        assert!(state.is_expanded(FaqId::new(0, 0)));
    }

    #[test]
    fn test_ids_stay_unique_past_one_hundred_questions() {
        static MANY: [FaqEntry; 120] = [Q; 120];
        static BIG: &[FaqCategory] = &[
            FaqCategory { title: "big", entries: &MANY },
            FaqCategory { title: "next", entries: &[Q] },
        ];
        let ids = all_ids(BIG);
        let unique: BTreeSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());

        let mut state = ExpandedItems::for_catalog(BIG);
        state.toggle(FaqId::new(0, 100));
        assert!(!state.is_expanded(FaqId::new(1, 0)));
    }

    #[test]
    fn test_unknown_id_is_harmless() {
        let mut state = ExpandedItems::for_catalog(FAQ_CATEGORIES);
        state.toggle(FaqId::new(42, 7));
        assert!(state.is_expanded(FaqId::new(42, 7)));
        assert!(state.is_expanded(FaqId::new(0, 0)));
        assert_eq!(
            all_ids(FAQ_CATEGORIES)
                .into_iter()
                .filter(|id| state.is_expanded(*id))
                .count(),
            1
        );
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        static SPARSE: &[FaqCategory] = &[
            FaqCategory { title: "empty", entries: &[] },
            FaqCategory { title: "full", entries: &[Q, Q] },
        ];
        assert_eq!(first_id(SPARSE), Some(FaqId::new(1, 0)));
        assert_eq!(ExpandedItems::for_catalog(&[]).expanded_count(), 0);
    }

    #[test]
    fn test_expanded_count_follows_toggles() {
        let mut state = ExpandedItems::for_catalog(FAQ_CATEGORIES);
        let ids = all_ids(FAQ_CATEGORIES);
        state.toggle(ids[3]);
        state.toggle(ids[7]);
        assert_eq!(state.expanded_count(), 3);
        state.toggle(ids[0]);
        assert_eq!(state.expanded_count(), 2);
        assert_eq!(entries(FAQ_CATEGORIES).count(), ids.len());
    }
}
