//! One handler per résumé section. Each renders a slice of the shared `Resume`
//! through its template; access control happens in the session gate.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::render::render;
use crate::resume::models::{
    Achievement, Education, Experience, ProfessionalDevelopment, ProfessionalSummary,
    SkillGroup,
};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "education.html")]
struct EducationTemplate {
    education: &'static [Education],
}

#[derive(Template)]
#[template(path = "professional_experience.html")]
struct ExperienceTemplate {
    experience: &'static [Experience],
}

#[derive(Template)]
#[template(path = "achievements.html")]
struct AchievementsTemplate {
    achievements: &'static [Achievement],
}

#[derive(Template)]
#[template(path = "professional_summary.html")]
struct ProfessionalSummaryTemplate {
    professional_summary: &'static ProfessionalSummary,
}

#[derive(Template)]
#[template(path = "skills.html")]
struct SkillsTemplate {
    skills: &'static [SkillGroup],
}

#[derive(Template)]
#[template(path = "professional_development.html")]
struct ProfessionalDevelopmentTemplate {
    professional_development: &'static [ProfessionalDevelopment],
}

/// GET /api/resume/education
pub async fn handle_education(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&EducationTemplate {
        education: state.resume.education,
    })
}

/// GET /api/resume/experience
pub async fn handle_experience(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&ExperienceTemplate {
        experience: state.resume.experience,
    })
}

/// GET /api/resume/achievement
pub async fn handle_achievements(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&AchievementsTemplate {
        achievements: state.resume.achievements,
    })
}

/// GET /api/resume/professional_summary
pub async fn handle_professional_summary(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render(&ProfessionalSummaryTemplate {
        professional_summary: state.resume.professional_summary,
    })
}

/// GET /api/resume/skills
pub async fn handle_skills(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&SkillsTemplate {
        skills: state.resume.skills,
    })
}

/// GET /api/resume/professional_development
pub async fn handle_professional_development(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render(&ProfessionalDevelopmentTemplate {
        professional_development: state.resume.professional_development,
    })
}
