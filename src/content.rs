//! Hardcoded portfolio content.

/// Kind of outbound contact link, used to pick an icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Phone => "📞",
            ContactKind::LinkedIn => "🔗",
            ContactKind::GitHub => "🐙",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::GitHub => "GitHub",
        }
    }
}

/// External link; the URI is passed to the host untouched.
#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub uri: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
    /// How many entries the card shows.
    pub shown: usize,
}

impl SkillGroup {
    pub fn visible_skills(&self) -> &'static [&'static str] {
        &self.skills[..self.shown.min(self.skills.len())]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const NAME: &str = "MOHIT RAJPUT";
pub const MONOGRAM: &str = "MR";
pub const ROLE: &str = "Software Developer";
pub const SUMMARY: &str = "Highly qualified software developer with 1 year of professional \
experience at NewTech Fusion Pvt Ltd. Proficient in Core Java, JavaScript, and the MERN stack, \
with hands-on experience working on live projects.";

/// Target of the hero's "View My Work" button.
pub const WORK_ANCHOR: &str = "#projects";

pub const ABOUT_HEADLINE: &str = "Quick learner with strong problem-solving skills";
pub const ABOUT_BODY: &str = "I'm committed to continuous learning and contributing effectively \
to team success. With hands-on experience in live projects such as Gradient, Medicity, and AI \
Assistance, I bring practical knowledge and innovative solutions to every project.";

pub const CONTACT_BLURB: &str = "I'm always open to discussing new opportunities and exciting \
projects. Let's connect and create something amazing together!";

pub const FOOTER: &str = "© 2024 Mohit Rajput. All rights reserved.";

pub const EMAIL: ContactLink = ContactLink {
    kind: ContactKind::Email,
    label: "mouryamohitsingh@gmail.com",
    uri: "mailto:mouryamohitsingh@gmail.com",
};

pub const PHONE: ContactLink = ContactLink {
    kind: ContactKind::Phone,
    label: "+91 6260335083",
    uri: "tel:+916260335083",
};

pub const LINKEDIN: ContactLink = ContactLink {
    kind: ContactKind::LinkedIn,
    label: "mohit-rajput-mr13",
    uri: "https://linkedin.com/in/mohit-rajput-mr13",
};

pub const GITHUB: ContactLink = ContactLink {
    kind: ContactKind::GitHub,
    label: "GitHub",
    uri: "https://github.com",
};

/// Icons under the hero banner.
pub const SOCIALS: [ContactLink; 4] = [LINKEDIN, GITHUB, EMAIL, PHONE];

/// Cards in the contact section.
pub const CONTACTS: [ContactLink; 3] = [EMAIL, PHONE, LINKEDIN];

pub const STATS: [Stat; 2] = [
    Stat {
        value: "1+",
        caption: "Years Experience",
    },
    Stat {
        value: "4+",
        caption: "Live Projects",
    },
];

pub const EDUCATION: [Education; 2] = [
    Education {
        title: "Bachelor of Commerce (Computer Applications)",
        institution: "Barkatullah University | 6.85 CGPA",
        period: "2021 - 2023",
    },
    Education {
        title: "MPIF Associate - IT Excellence Program",
        institution: "InfoBeans Foundation",
        period: "2023 - 2024",
    },
];

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        icon: "🌐",
        title: "Frontend",
        skills: &[
            "React.js",
            "JavaScript",
            "TypeScript",
            "HTML",
            "CSS",
            "Bootstrap",
            "Tailwind CSS",
            "Material UI",
            "Ant Design",
        ],
        shown: 6,
    },
    SkillGroup {
        icon: "⌨",
        title: "Backend",
        skills: &["Node.js", "Express.js", "RESTful APIs", "Webhooks"],
        shown: usize::MAX,
    },
    SkillGroup {
        icon: "🗄",
        title: "Databases",
        skills: &["MongoDB", "MySQL"],
        shown: usize::MAX,
    },
    SkillGroup {
        icon: "🛠",
        title: "Tools",
        skills: &["Postman", "GitHub", "Vapi.ai", "Redux"],
        shown: usize::MAX,
    },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "AI Assistance (Pkaila)",
        description: "Voice-Based Virtual Agent using Vapi.ai with automated inbound and \
outbound calls for businesses",
        tech: &["React.js", "Redux", "Material UI", "Node.js", "Vapi.ai"],
        features: &[
            "Real-time voice conversations",
            "Business automation",
            "Multi-organization support",
        ],
    },
    Project {
        title: "Gradient Analytics Dashboard",
        description: "Interactive dashboard for visualizing business metrics and KPIs with \
role-based access control",
        tech: &["React.js", "Ant Design", "Redux", "Bootstrap"],
        features: &["Data visualization", "Role-based access", "Interactive charts"],
    },
    Project {
        title: "Medicity Healthcare System",
        description: "Complete healthcare management system for patients, bookings, and staff \
communication",
        tech: &["React.js", "Redux", "Bootstrap", "Firebase", "MERN Stack"],
        features: &[
            "Patient management",
            "Appointment booking",
            "Staff communication",
            "SMS & email integration",
        ],
    },
    Project {
        title: "Vehivalue Car Platform",
        description: "Second-hand car selling platform with role-based modules for different \
user types",
        tech: &["React.js", "Redux", "Node.js", "MongoDB", "MERN Stack"],
        features: &[
            "Car listings",
            "User management",
            "Sales monitoring",
            "Secure authentication",
        ],
    },
];
