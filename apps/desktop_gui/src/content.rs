//! Fixed page content: the rotating hero titles and the technology grid.
//! Remote content (projects, experiences) comes from the portfolio API.

use shared::domain::Skill;

/// Phrases cycled by the hero typewriter.
pub const TYPED_TITLES: &[&str] = &[
    "Full-Stack Engineer \u{1F4BB}",
    "Web Architect \u{1F3D7}",
    "API Artisan \u{1F6E0}",
    "Cloud Developer \u{2601}",
    "DevOps Advocate \u{1F680}",
    "Database Whisperer \u{1F5C4}",
    "UI/UX Alchemist \u{1F3A8}",
    "Tech Stack Juggler \u{1F939}",
    "Code Optimizer \u{26A1}",
    "Open Source Contributor \u{1F30D}",
    "CI/CD Specialist \u{1F504}",
    "Blockchain Builder \u{26D3}",
    "AI/ML Integrator \u{1F9E0}",
    "Security Guardian \u{1F6E1}",
    "Tech Evangelist \u{1F4E2}",
    "Mobile Maestro \u{1F4F1}",
    "Microservices Maestro \u{1F9E9}",
    "Serverless Specialist \u{26A1}",
    "Tech Mentor \u{1F468}\u{200D}\u{1F3EB}",
    "Code Poet \u{270D}",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML", glyph: "\u{1F310}", tint: (249, 115, 22) },
    Skill { name: "CSS", glyph: "\u{1F3A8}", tint: (59, 130, 246) },
    Skill { name: "Javascript", glyph: "\u{26A1}", tint: (234, 179, 8) },
    Skill { name: "React", glyph: "\u{269B}", tint: (6, 182, 212) },
    Skill { name: "Next.js", glyph: "\u{25B2}", tint: (229, 231, 235) },
    Skill { name: "Python", glyph: "\u{1F40D}", tint: (96, 165, 250) },
    Skill { name: "Django", glyph: "\u{1F3AF}", tint: (21, 128, 61) },
    Skill { name: "PostgreSQL", glyph: "\u{1F418}", tint: (37, 99, 235) },
    Skill { name: "MongoDB", glyph: "\u{1F343}", tint: (34, 197, 94) },
    Skill { name: "Redis", glyph: "\u{1F9F1}", tint: (220, 38, 38) },
    Skill { name: "ElasticSearch", glyph: "\u{1F50D}", tint: (202, 138, 4) },
    Skill { name: "Kafka", glyph: "\u{1F4E8}", tint: (212, 212, 216) },
    Skill { name: "GIT", glyph: "\u{1F33F}", tint: (239, 68, 68) },
    Skill { name: "Amazon Web Services", glyph: "\u{2601}", tint: (251, 146, 60) },
    Skill { name: "Docker", glyph: "\u{1F433}", tint: (96, 165, 250) },
];
