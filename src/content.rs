pub const PROFESSIONS: &[&str] = &[
    "Full Stack Developer",
    "AI Engineer",
    "Java Developer",
    "Machine Learning Enthusiast",
];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub image: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", level: 95, icon: "fab fa-html5" },
    Skill { name: "CSS3", level: 90, icon: "fab fa-css3-alt" },
    Skill { name: "JavaScript", level: 88, icon: "fab fa-js" },
    Skill { name: "Java", level: 85, icon: "fab fa-java" },
    Skill { name: "Python", level: 92, icon: "fab fa-python" },
    Skill { name: "React", level: 80, icon: "fab fa-react" },
    Skill { name: "MySQL", level: 80, icon: "fas fa-database" },
    Skill { name: "MongoDB", level: 80, icon: "fas fa-leaf" },
    Skill { name: "Machine Learning", level: 88, icon: "fas fa-robot" },
    Skill { name: "Deep Learning", level: 75, icon: "fas fa-brain" },
    Skill { name: "Git & GitHub", level: 90, icon: "fab fa-git-alt" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bus Ticket Booking System",
        description: "Web app for booking and managing bus tickets using Java, JSP, MySQL.",
        technologies: &["Java", "JSP", "MySQL", "HTML", "CSS"],
        github: "https://github.com/vignesh-chowdary/bus-ticket-booking-system",
        live: "",
        image: "images/bus.png",
    },
    Project {
        title: "Automated OCR Mark Extractor",
        description: "OCR system using YOLOv9 and Vision Transformers to auto-extract exam marks.",
        technologies: &["Python", "YOLOv9", "Transformers", "OpenCV"],
        github: "#",
        live: "",
        image: "images/ocr.png",
    },
    Project {
        title: "Health Tracker",
        description: "Personal wellness tracker with graphs for water, calories, and sleep.",
        technologies: &["HTML", "CSS", "JavaScript", "Chart.js"],
        github: "",
        live: "",
        image: "images/health.png",
    },
];

/// One rendered skill row. `level` is kept so the bar can be refilled later
/// without reading the width back out of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillRow {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u8,
}

impl SkillRow {
    pub fn progress_width(&self) -> String {
        format!("{}%", self.level)
    }

    pub fn progress_style(&self) -> String {
        format!("width: {}", self.progress_width())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Source,
    LiveDemo,
}

impl LinkKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Source => "fab fa-github",
            Self::LiveDemo => "fas fa-external-link-alt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "Source code",
            Self::LiveDemo => "Live demo",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: Vec<&'static str>,
    pub links: Vec<ProjectLink>,
}

pub fn skill_rows(skills: &[Skill]) -> Vec<SkillRow> {
    skills
        .iter()
        .map(|skill| SkillRow {
            name: skill.name,
            icon: skill.icon,
            level: skill.level.min(100),
        })
        .collect()
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|project| {
            let links = [(LinkKind::Source, project.github), (LinkKind::LiveDemo, project.live)]
                .into_iter()
                .filter(|(_, href)| !href.trim().is_empty())
                .map(|(kind, href)| ProjectLink { kind, href })
                .collect();

            ProjectCard {
                title: project.title,
                description: project.description,
                image: project.image,
                tags: project.technologies.to_vec(),
                links,
            }
        })
        .collect()
}
