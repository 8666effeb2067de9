//! Literal page content.
//!
//! Everything rendered on the page comes from the tables in this module. The
//! records are plain `'static` data; list position is the only identity an
//! entry has and drives its staggered entrance delay.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Database,
    Server,
    Brain,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "💻",
            Self::Database => "🗄️",
            Self::Server => "🖥️",
            Self::Brain => "🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a percentage, 0 to 100.
    pub level: u8,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

/// Summary card shown under the skill bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillArea {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: SkillIcon,
    pub accent: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub label: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    /// Icon colour class.
    pub accent: &'static str,
    /// Border and shadow classes applied on hover.
    pub hover: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub bio: &'static [&'static str],
    pub availability: &'static str,
    pub closing: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with display separators stripped.
    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

pub static PROFILE: Profile = Profile {
    name: "Anshuman Kansana",
    headline: "Full-Stack Developer & Software Developer",
    location: "Gwalior, India",
    email: "anshumankansana@gmail.com",
    phone: "+91-7223069582",
    github: "https://github.com/anshumankansana",
    linkedin: "https://linkedin.com/in/AnshumanKansana",
    bio: &[
        "I'm a passionate B.Tech Computer Science graduate from ITM University, Gwalior, with a strong foundation in full-stack development and emerging technologies. With hands-on experience across multiple internships, I've built scalable web applications, worked with cloud technologies, and explored the fascinating world of machine learning.",
        "My journey spans from frontend React applications to backend APIs, from traditional databases to cloud infrastructure. I believe in creating meaningful, user-centered solutions that make a real impact.",
    ],
    availability: "Open for Full-time Opportunities",
    closing: "Ready to collaborate on exciting projects and bring innovative ideas to life!",
};

pub static HERO_CHIPS: [&str; 5] = [
    "JavaScript",
    "React.js",
    "Python",
    "AWS",
    "Machine Learning",
];

pub static SKILLS: [Skill; 8] = [
    Skill {
        name: "JavaScript",
        level: 90,
        icon: SkillIcon::Code,
    },
    Skill {
        name: "React.js",
        level: 85,
        icon: SkillIcon::Code,
    },
    Skill {
        name: "Python",
        level: 80,
        icon: SkillIcon::Code,
    },
    Skill {
        name: "MongoDB",
        level: 75,
        icon: SkillIcon::Database,
    },
    Skill {
        name: "MySQL",
        level: 70,
        icon: SkillIcon::Database,
    },
    Skill {
        name: "AWS",
        level: 65,
        icon: SkillIcon::Server,
    },
    Skill {
        name: "Node.js",
        level: 80,
        icon: SkillIcon::Server,
    },
    Skill {
        name: "Machine Learning",
        level: 70,
        icon: SkillIcon::Brain,
    },
];

pub static SKILL_AREAS: [SkillArea; 3] = [
    SkillArea {
        title: "Frontend",
        summary: "React.js, HTML/CSS, Bootstrap, Responsive Design",
        icon: SkillIcon::Code,
        accent: "text-blue-400",
        delay_ms: 300,
    },
    SkillArea {
        title: "Backend",
        summary: "Node.js, Python, APIs, AWS Cloud Services",
        icon: SkillIcon::Server,
        accent: "text-green-400",
        delay_ms: 500,
    },
    SkillArea {
        title: "Database",
        summary: "MongoDB, MySQL, Data Optimization",
        icon: SkillIcon::Database,
        accent: "text-purple-400",
        delay_ms: 700,
    },
];

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Online Video Interview Platform",
        tech: "React.js, Node.js, MongoDB, WebRTC",
        description:
            "Full-stack platform with live interviews, chat, scheduling, and history management.",
        features: &[
            "Live Video Interviews",
            "Real-time Chat",
            "Interview Scheduling",
            "History Tracking",
        ],
    },
    Project {
        title: "Student Grade Prediction",
        tech: "Python, Scikit-learn, Pandas, NumPy",
        description:
            "ML model to predict academic performance from student behavioral and academic data.",
        features: &[
            "Predictive Analytics",
            "Data Visualization",
            "Performance Metrics",
            "Model Training",
        ],
    },
    Project {
        title: "Encrypted Door Lock",
        tech: "Arduino, C, Fingerprint Sensor",
        description:
            "Secure fingerprint-based locking system with encryption and access control.",
        features: &[
            "Biometric Security",
            "Data Encryption",
            "Access Logs",
            "Hardware Integration",
        ],
    },
    Project {
        title: "Face Emotion Detection",
        tech: "Python, OpenCV, DeepFace, TensorFlow",
        description:
            "Real-time emotion recognition system using computer vision and deep learning.",
        features: &[
            "Real-time Processing",
            "Emotion Classification",
            "Facial Recognition",
            "Live Camera Feed",
        ],
    },
];

pub static EXPERIENCE: [Experience; 4] = [
    Experience {
        role: "Frontend Developer Intern",
        company: "Enrich Datascience Pvt. Ltd.",
        period: "Jan 2025 – Feb 2025",
        description: "Built responsive dashboards using React.js, Vite, and REST APIs with focus on user experience.",
    },
    Experience {
        role: "CMS Developer Intern",
        company: "EVI Technologies Pvt. Ltd.",
        period: "Sep 2024 – Oct 2024",
        description: "Developed intuitive CMS interfaces and enhanced admin dashboard functionality.",
    },
    Experience {
        role: "Salesforce Developer Intern",
        company: "Salesforce, Gwalior",
        period: "May 2024 – Jun 2024",
        description: "Customized workflows using Apex and Visualforce, integrated third-party solutions.",
    },
    Experience {
        role: "Backend Developer Intern",
        company: "Rajeev Classes, Kota",
        period: "Oct 2023 – Dec 2023",
        description: "Optimized database performance and handled backend operations for educational platform.",
    },
];

pub static EDUCATION: [Education; 2] = [
    Education {
        degree: "B.Tech Computer Science",
        institution: "ITM University, Gwalior",
        period: "2021 – 2025",
    },
    Education {
        degree: "12th Grade (PCM)",
        institution: "Pragati Vidhya Peeth, Gwalior",
        period: "2020 – 2021",
    },
];

pub fn contact_cards() -> [ContactCard; 4] {
    [
        ContactCard {
            label: "Email",
            detail: PROFILE.email,
            href: "mailto:anshumankansana@gmail.com",
            glyph: "📧",
            accent: "text-blue-400",
            hover: "hover:border-blue-500 hover:shadow-blue-500/20",
            delay_ms: 200,
        },
        ContactCard {
            label: "Phone",
            detail: PROFILE.phone,
            href: "tel:+917223069582",
            glyph: "📞",
            accent: "text-green-400",
            hover: "hover:border-green-500 hover:shadow-green-500/20",
            delay_ms: 300,
        },
        ContactCard {
            label: "GitHub",
            detail: "Code Repository",
            href: PROFILE.github,
            glyph: "🐙",
            accent: "text-orange-400",
            hover: "hover:border-orange-500 hover:shadow-orange-500/20",
            delay_ms: 400,
        },
        ContactCard {
            label: "LinkedIn",
            detail: "Professional Profile",
            href: PROFILE.linkedin,
            glyph: "💼",
            accent: "text-purple-400",
            hover: "hover:border-purple-500 hover:shadow-purple-500/20",
            delay_ms: 500,
        },
    ]
}

/// Delay before the closing call-to-action block fades in.
pub const CLOSING_DELAY_MS: u32 = 600;
