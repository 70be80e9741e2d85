//! Résumé content. Compiled into the binary; never mutated.

use crate::resume::models::{
    Achievement, Education, Experience, Proficiency, ProfessionalDevelopment,
    ProfessionalSummary, Resume, Skill, SkillGroup,
};

pub static RESUME: Resume = Resume {
    education: EDUCATION,
    experience: EXPERIENCE,
    achievements: ACHIEVEMENTS,
    professional_summary: &PROFESSIONAL_SUMMARY,
    skills: SKILLS,
    professional_development: PROFESSIONAL_DEVELOPMENT,
};

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "University of Washington",
        degree: "Master of Science",
        field: "Computer Science",
        location: "Seattle, WA",
        start: "2014",
        end: "2016",
        highlights: &[
            "Thesis on consistency models for geo-replicated key-value stores",
            "Teaching assistant for Operating Systems",
        ],
    },
    Education {
        institution: "University of Texas at Austin",
        degree: "Bachelor of Science",
        field: "Electrical and Computer Engineering",
        location: "Austin, TX",
        start: "2010",
        end: "2014",
        highlights: &[
            "Graduated with highest honors",
            "Senior design project: low-power sensor mesh network",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Northwind Cloud",
        title: "Staff Software Engineer",
        location: "Seattle, WA",
        start: "Mar 2021",
        end: None,
        responsibilities: &[
            "Lead the storage control plane team of eight engineers",
            "Designed a multi-region metadata service serving 2M requests per second",
            "Cut p99 write latency by 40 percent by reworking the replication pipeline",
        ],
    },
    Experience {
        company: "Contoso Analytics",
        title: "Senior Software Engineer",
        location: "Austin, TX",
        start: "Jun 2018",
        end: Some("Feb 2021"),
        responsibilities: &[
            "Built the streaming ingestion tier for customer event data",
            "Migrated batch ETL jobs to an incremental pipeline, saving 60 percent of compute cost",
            "Mentored four engineers through promotion",
        ],
    },
    Experience {
        company: "Fabrikam Systems",
        title: "Software Engineer",
        location: "Seattle, WA",
        start: "Jul 2016",
        end: Some("May 2018"),
        responsibilities: &[
            "Implemented the authentication gateway used by all internal services",
            "Owned on-call tooling and incident dashboards",
        ],
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Engineering Excellence Award",
        year: 2023,
        description: "Recognised for leading the zero-downtime migration of the metadata service.",
    },
    Achievement {
        title: "Patent: Adaptive Replica Placement",
        year: 2020,
        description: "Co-inventor on a patent for latency-aware replica placement across regions.",
    },
    Achievement {
        title: "Hackathon Winner",
        year: 2017,
        description: "First place in the company-wide hackathon with a self-healing deploy tool.",
    },
];

pub const PROFESSIONAL_SUMMARY: ProfessionalSummary = ProfessionalSummary {
    headline: "Distributed systems engineer with ten years of experience building reliable cloud infrastructure",
    paragraphs: &[
        "I design and operate large-scale storage and data systems, with a focus on correctness, latency and operability.",
        "I enjoy leading small teams, turning ambiguous problems into well-scoped projects, and growing engineers along the way.",
    ],
};

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &[
            Skill {
                name: "Rust",
                proficiency: Proficiency::Expert,
            },
            Skill {
                name: "Go",
                proficiency: Proficiency::Expert,
            },
            Skill {
                name: "Python",
                proficiency: Proficiency::Proficient,
            },
            Skill {
                name: "TypeScript",
                proficiency: Proficiency::Familiar,
            },
        ],
    },
    SkillGroup {
        category: "Infrastructure",
        skills: &[
            Skill {
                name: "Kubernetes",
                proficiency: Proficiency::Expert,
            },
            Skill {
                name: "Terraform",
                proficiency: Proficiency::Proficient,
            },
            Skill {
                name: "PostgreSQL",
                proficiency: Proficiency::Proficient,
            },
            Skill {
                name: "Kafka",
                proficiency: Proficiency::Proficient,
            },
        ],
    },
    SkillGroup {
        category: "Practices",
        skills: &[
            Skill {
                name: "System Design",
                proficiency: Proficiency::Expert,
            },
            Skill {
                name: "Incident Management",
                proficiency: Proficiency::Expert,
            },
            Skill {
                name: "Technical Mentoring",
                proficiency: Proficiency::Proficient,
            },
        ],
    },
];

pub const PROFESSIONAL_DEVELOPMENT: &[ProfessionalDevelopment] = &[
    ProfessionalDevelopment {
        title: "Certified Kubernetes Administrator",
        provider: "Cloud Native Computing Foundation",
        year: 2022,
        description: "Cluster operations, networking and troubleshooting.",
    },
    ProfessionalDevelopment {
        title: "Designing Data-Intensive Applications Workshop",
        provider: "InfoQ",
        year: 2019,
        description: "Replication, partitioning and stream processing patterns.",
    },
    ProfessionalDevelopment {
        title: "Engineering Leadership Program",
        provider: "LeadDev",
        year: 2021,
        description: "Managing technical teams, feedback and career growth.",
    },
];
