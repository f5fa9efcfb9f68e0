use crate::portfolio::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fact(label: &str, value: &str, emphasized: bool) -> Fact {
    Fact {
        label: label.to_string(),
        value: value.to_string(),
        emphasized,
    }
}

fn skill_group(title: &str, icon: &str, accent: Accent, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        icon: icon.to_string(),
        accent,
        skills: strings(skills),
    }
}

const PROJECT_PLACEHOLDER: &str = "Your project descriptions will go here. Showcase the problem \
    you solved, the technologies used, and the impact of your work.";

pub(crate) fn portfolio() -> Portfolio {
    Portfolio {
        metadata: SiteMetadata {
            title: "Aman Kumar Sah - Software Engineer & Data Scientist".to_string(),
            description: "Portfolio of Aman Kumar Sah - 3rd year CS student at IIMS College \
                (Taylor's University) specializing in Data Science, AI/ML, and Software \
                Engineering. CS Teacher & IT Department Head."
                .to_string(),
            keywords: strings(&[
                "Software Engineer",
                "Data Scientist",
                "AI/ML",
                "Computer Science",
                "Portfolio",
                "Nepal",
                "IIMS College",
                "Taylor's University",
            ]),
            url: "https://amanshah.com.np".to_string(),
            site_name: "Aman Kumar Sah - Portfolio".to_string(),
            locale: "en_US".to_string(),
            author: "Aman Kumar Sah".to_string(),
        },
        profile: Profile {
            brand: "AKS".to_string(),
            eyebrow: "Aman's Portfolio".to_string(),
            greeting: "Hey, I'm".to_string(),
            name: "Aman Kumar Sah".to_string(),
            tagline: "Computer Science Undergraduate • Specializing in Data Science & AI/ML"
                .to_string(),
            summary: "3rd year Computer Science student at IIMS College (Taylor's University) \
                with a passion for building intelligent solutions and teaching the next \
                generation of engineers."
                .to_string(),
            image: Image {
                path: "/professional-handsome-portrait-photo.jpg".to_string(),
                alt: "Aman Kumar Sah".to_string(),
            },
        },
        about: About {
            heading: "About Me".to_string(),
            paragraphs: strings(&[
                "My journey to software engineering started as a childhood dream. What began \
                 as curiosity has evolved into genuine passion for solving complex problems \
                 through elegant code, data-driven insights, and intelligent systems.",
                "I'm currently pursuing a Bachelor of Computer Science (Hons) with a \
                 specialization in Data Science at IIMS College. My focus is on the \
                 intersection of AI/ML and software engineering—building systems that not \
                 only work, but think.",
                "Beyond academics, I'm passionate about education and leadership. I teach \
                 Computer Science and lead the IT department at a secondary school, where I \
                 mentor young minds and foster technological innovation.",
            ]),
            journey: vec![
                Milestone {
                    title: "Childhood Dream".to_string(),
                    detail: "Always wanted to be a software engineer".to_string(),
                },
                Milestone {
                    title: "Active Learner".to_string(),
                    detail: "Built multiple academic projects in AI/ML and web dev".to_string(),
                },
                Milestone {
                    title: "Passionate Educator".to_string(),
                    detail: "Teaching CS and leading IT department".to_string(),
                },
            ],
            education: vec![
                Education {
                    degree: "Bachelor of Computer Science".to_string(),
                    institution: "IIMS College (Taylor's University)".to_string(),
                    icon: "🎓".to_string(),
                    period: None,
                    facts: vec![
                        fact("Year", "3rd Year (2023 - Present)", false),
                        fact("Specialization", "Data Science", true),
                        fact("Location", "Kathmandu, Nepal", false),
                    ],
                },
                Education {
                    degree: "+2 Science (PCB)".to_string(),
                    institution: "MIT High School, Janakpur".to_string(),
                    icon: "📚".to_string(),
                    period: Some("2021 - 2023".to_string()),
                    facts: vec![],
                },
            ],
            stats: vec![
                Stat {
                    value: "5+".to_string(),
                    label: "Projects Built".to_string(),
                    accent: Accent::Primary,
                },
                Stat {
                    value: "4".to_string(),
                    label: "Languages".to_string(),
                    accent: Accent::Accent,
                },
            ],
        },
        skills: Skills {
            heading: "Skills & Expertise".to_string(),
            groups: vec![
                skill_group(
                    "Languages & Frameworks",
                    "💻",
                    Accent::Primary,
                    &["Python", "Java", "JavaScript", "React", "Next.js"],
                ),
                skill_group(
                    "Data Science & AI/ML",
                    "🤖",
                    Accent::Accent,
                    &[
                        "Machine Learning",
                        "TensorFlow",
                        "Data Analysis",
                        "Statistical Modeling",
                        "Python ML",
                    ],
                ),
                skill_group(
                    "Databases & Cloud",
                    "☁",
                    Accent::Cyan,
                    &["MySQL", "PostgreSQL", "AWS", "Git", "Linux"],
                ),
                skill_group(
                    "Web Development",
                    "🌐",
                    Accent::Purple,
                    &[
                        "HTML/CSS",
                        "Responsive Design",
                        "API Development",
                        "Web Architecture",
                    ],
                ),
                skill_group(
                    "Education & Leadership",
                    "📚",
                    Accent::Green,
                    &[
                        "Curriculum Design",
                        "Student Mentoring",
                        "Technical Management",
                        "Team Leadership",
                    ],
                ),
                skill_group(
                    "Languages",
                    "🌍",
                    Accent::Orange,
                    &["English", "Nepali", "Hindi", "Maithili"],
                ),
            ],
        },
        experience: ExperienceSection {
            heading: "Experience & Certifications".to_string(),
            entries: vec![
                Experience {
                    category: "Teaching".to_string(),
                    title: "Computer Science Teacher".to_string(),
                    subtitle: "IT Department Head".to_string(),
                    organization: "Secondary School".to_string(),
                    date: "Started: May 2025".to_string(),
                    icon: "🏫".to_string(),
                    accent: Accent::Primary,
                    description: None,
                    highlights: strings(&[
                        "Mentoring students in programming and computer science",
                        "Curriculum development and IT infrastructure management",
                        "Leading technological innovation in education",
                    ]),
                },
                Experience {
                    category: "Certification".to_string(),
                    title: "AWS Cloud Practitioner".to_string(),
                    subtitle: "Essentials".to_string(),
                    organization: "Amazon Web Services".to_string(),
                    date: "Completed: November 3, 2023".to_string(),
                    icon: "☁".to_string(),
                    accent: Accent::Accent,
                    description: Some(
                        "Foundational knowledge of AWS cloud services, architecture patterns, \
                         and best practices. Understanding cloud infrastructure is essential \
                         for building modern, scalable applications."
                            .to_string(),
                    ),
                    highlights: vec![],
                },
            ],
        },
        projects: Projects {
            heading: "Featured Projects".to_string(),
            entries: vec![
                Project {
                    title: "Data Science Project".to_string(),
                    description: PROJECT_PLACEHOLDER.to_string(),
                    image_query: "machine-learning-data-science-project-analysis".to_string(),
                    status: "Coming Soon".to_string(),
                },
                Project {
                    title: "AI/ML Project".to_string(),
                    description: PROJECT_PLACEHOLDER.to_string(),
                    image_query: "artificial-intelligence-deep-learning-neural-networks"
                        .to_string(),
                    status: "Coming Soon".to_string(),
                },
            ],
            note: Some("Academic projects will be showcased here once updated".to_string()),
        },
        contact: Contact {
            heading: "Let's Build Something Great".to_string(),
            blurb: "I'm always interested in hearing about new opportunities, interesting \
                projects, and ways to contribute to the tech community."
                .to_string(),
            cards: vec![
                ContactCard {
                    kind: LinkKind::Email,
                    label: "Email".to_string(),
                    value: "amanshah0120@gmail.com".to_string(),
                    href: "mailto:amanshah0120@gmail.com".to_string(),
                },
                ContactCard {
                    kind: LinkKind::Phone,
                    label: "Phone".to_string(),
                    value: "+977-9762304077".to_string(),
                    href: "tel:+977-9762304077".to_string(),
                },
                ContactCard {
                    kind: LinkKind::LinkedIn,
                    label: "LinkedIn".to_string(),
                    value: "Connect with me".to_string(),
                    href: "https://www.linkedin.com/in/amanshah0101".to_string(),
                },
            ],
            socials: vec![
                Link {
                    kind: LinkKind::GitHub,
                    label: "GitHub".to_string(),
                    href: "https://github.com/amansah0101".to_string(),
                },
                Link {
                    kind: LinkKind::LinkedIn,
                    label: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com/in/amanshah0101".to_string(),
                },
            ],
            footer: "© 2026 Aman Kumar Sah. All rights reserved.".to_string(),
        },
    }
}
