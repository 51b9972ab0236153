/// A firm department. Not fetched: the catalog is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Department {
    pub name: &'static str,
    pub icon: &'static str,
    pub members: u32,
    pub max_members: u32,
    pub channels: &'static [&'static str],
}

impl Department {
    /// Channel names without their leading `#`.
    pub fn channel_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.channels.iter().map(|c| c.trim_start_matches('#'))
    }
}

pub const DEPARTMENTS: &[Department] = &[
    Department {
        name: "Partners & Management",
        icon: "👔",
        members: 3,
        max_members: 3,
        channels: &["#partners-only"],
    },
    Department {
        name: "Litigation Department",
        icon: "⚖️",
        members: 8,
        max_members: 8,
        channels: &["#litigation-general", "#case-discussions"],
    },
    Department {
        name: "Corporate Law",
        icon: "🏢",
        members: 6,
        max_members: 6,
        channels: &["#corporate-deals", "#mergers"],
    },
    Department {
        name: "Family Law",
        icon: "👨‍👩‍👧",
        members: 4,
        max_members: 4,
        channels: &["#family-cases"],
    },
    Department {
        name: "Criminal Defense",
        icon: "🔒",
        members: 5,
        max_members: 5,
        channels: &["#criminal-cases"],
    },
    Department {
        name: "Administration & HR",
        icon: "📋",
        members: 4,
        max_members: 4,
        channels: &["#admin-general", "#hr-announcements", "#admin-facilities"],
    },
];

/// Look up a department by its exact name.
pub fn find_department(name: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.name == name)
}
