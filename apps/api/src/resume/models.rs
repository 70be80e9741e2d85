#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub company: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    /// `None` for the current role.
    pub end: Option<&'static str>,
    pub responsibilities: &'static [&'static str],
}

impl Experience {
    pub fn period(&self) -> String {
        format!("{} to {}", self.start, self.end.unwrap_or("Present"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub year: u16,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalSummary {
    pub headline: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Familiar,
    Proficient,
    Expert,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Familiar => "Familiar",
            Proficiency::Proficient => "Proficient",
            Proficiency::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalDevelopment {
    pub title: &'static str,
    pub provider: &'static str,
    pub year: u16,
    pub description: &'static str,
}

/// The whole résumé. Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Resume {
    pub education: &'static [Education],
    pub experience: &'static [Experience],
    pub achievements: &'static [Achievement],
    pub professional_summary: &'static ProfessionalSummary,
    pub skills: &'static [SkillGroup],
    pub professional_development: &'static [ProfessionalDevelopment],
}
