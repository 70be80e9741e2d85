pub mod data;
pub mod handlers;
pub mod models;

/// A résumé page as linked from the landing page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub path: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: [Section; 6] = [
    Section {
        path: "/api/resume/professional_summary",
        title: "Professional Summary",
    },
    Section {
        path: "/api/resume/experience",
        title: "Experience",
    },
    Section {
        path: "/api/resume/education",
        title: "Education",
    },
    Section {
        path: "/api/resume/skills",
        title: "Skills",
    },
    Section {
        path: "/api/resume/achievement",
        title: "Achievements",
    },
    Section {
        path: "/api/resume/professional_development",
        title: "Professional Development",
    },
];
