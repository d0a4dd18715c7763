use super::{
    Award, EducationEntry, ExperienceEntry, Language, Project, ResumeProfile, Skill, SkillCategory,
};

pub static RESUME_DATA: ResumeProfile = ResumeProfile {
    name: "Adib",
    title: "Creative Technologist | 3D Artist | AI Developer",
    tagline: "A professional profile from the Upside Down.",
    email: "adib@example.com",
    website: "www.example.com",
    location: "Dhaka, Bangladesh",
    document_link: "/cv.pdf",
};

pub static EDUCATION_DATA: &[EducationEntry] = &[
    EducationEntry {
        id: "edu1",
        degree: "BSc in Multimedia and Creative Technology",
        institution: "Daffodil International University",
        year: "2020 - 2024",
        description: Some("Focus on 3D Computer Graphics, HCI, and Interactive Systems."),
    },
    EducationEntry {
        id: "edu2",
        degree: "Higher Secondary Certificate",
        institution: "Dhaka College",
        year: "2018 - 2020",
        description: Some("Science concentration."),
    },
];

pub static EXPERIENCE_DATA: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "exp1",
        title: "Creative Technologist & UI/UX Designer",
        organization: "TechVerse Solutions",
        duration: "2023 - Present",
        responsibilities: &[
            "Designed immersive user interfaces for VR/AR applications.",
            "Developed web platforms integrating real-time 3D assets.",
            "Collaborated with AI teams to visualize neural network outputs.",
        ],
    },
    ExperienceEntry {
        id: "exp2",
        title: "3D Artist (Freelance)",
        organization: "Global Clients",
        duration: "2021 - 2023",
        responsibilities: &[
            "Created high-fidelity 3D assets for game environments.",
            "Optimized models for web-based rendering.",
            "Delivered cinematic motion graphics for branding.",
        ],
    },
];

pub static SKILLS_DATA: &[SkillCategory] = &[
    SkillCategory {
        category: "Technical Skills",
        skills: &[
            Skill {
                name: "Rust / TypeScript",
                level: 90,
            },
            Skill {
                name: "WebGL / wgpu",
                level: 85,
            },
            Skill {
                name: "Python / AI Integration",
                level: 75,
            },
            Skill {
                name: "CSS / Tailwind",
                level: 95,
            },
        ],
    },
    SkillCategory {
        category: "Creative Skills",
        skills: &[
            Skill {
                name: "3D Modeling (Blender)",
                level: 90,
            },
            Skill {
                name: "UI/UX Design (Figma)",
                level: 85,
            },
            Skill {
                name: "Motion Graphics",
                level: 80,
            },
            Skill {
                name: "Video Editing",
                level: 70,
            },
        ],
    },
];

pub static PROJECTS_DATA: &[Project] = &[
    Project {
        id: "proj1",
        title: "Neural Visions",
        role: "Lead Developer & Artist",
        year: "2023",
        description: "AI-driven art installation that turns visitor movement into generative visuals.",
        technologies: &["Python", "PyTorch", "WebGL", "TouchDesigner"],
        link: Some("https://example.com/neural-visions"),
        features: &[
            "Real-time pose tracking",
            "Style-transfer shader pipeline",
            "Projection mapping across three walls",
        ],
    },
    Project {
        id: "proj2",
        title: "Hawkins Lab Portfolio",
        role: "Designer & Developer",
        year: "2024",
        description: "Themed single-page résumé with an audio-reactive spectrum band.",
        technologies: &["Rust", "Web Audio", "Canvas"],
        link: None,
        features: &[
            "Frequency-spectrum visualizer",
            "Procedural particle atmosphere",
        ],
    },
    Project {
        id: "proj3",
        title: "Low-Poly Asset Pack",
        role: "3D Artist",
        year: "2022",
        description: "Game-ready environment kit optimized for browsers.",
        technologies: &["Blender", "Substance Painter"],
        link: None,
        features: &[],
    },
];

pub static AWARDS_DATA: &[Award] = &[
    Award {
        id: "aw1",
        title: "Best Creative Tech Project",
        year: "2023",
        description: "Awarded for 'Neural Visions', an AI-driven art installation.",
    },
    Award {
        id: "aw2",
        title: "Hackathon Champion: UI/UX",
        year: "2022",
        description: "First place in National University Hackathon for accessible design.",
    },
];

pub static LANGUAGES_DATA: &[Language] = &[
    Language {
        language: "English",
        proficiency: "C1 (Proficient User)",
    },
    Language {
        language: "Bengali",
        proficiency: "Native Speaker",
    },
];
