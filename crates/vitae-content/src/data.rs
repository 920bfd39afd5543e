//! The portfolio record.

/// Welcome-splash greetings, one per language.
pub const GREETINGS: &[(&str, &str)] = &[
    ("Hello", "English"),
    ("வணக்கம்", "Tamil"),
    ("नमस्ते", "Hindi"),
    ("Bonjour", "French"),
    ("Hola", "Spanish"),
    ("Hallo", "German"),
    ("Ciao", "Italian"),
    ("こんにちは", "Japanese"),
    ("안녕하세요", "Korean"),
    ("你好", "Chinese"),
    ("Привет", "Russian"),
    ("مرحبا", "Arabic"),
    ("Olá", "Portuguese"),
    ("Hej", "Swedish"),
    ("Hei", "Norwegian"),
    ("Hej", "Danish"),
    ("Hallo", "Dutch"),
    ("Γεια σας", "Greek"),
    ("Merhaba", "Turkish"),
    ("שלום", "Hebrew"),
];

/// Name, headline, and the rotating hero subtitles.
#[derive(Debug, Clone, Copy)]
pub struct Personal {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Subtitles cycled by the hero typewriter.
    pub rotating_titles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct About {
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

/// One degree or diploma.
#[derive(Debug, Clone, Copy)]
pub struct SchoolRecord {
    pub degree: &'static str,
    pub institution: &'static str,
    pub score: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub primary: SchoolRecord,
    pub secondary: SchoolRecord,
}

#[derive(Debug, Clone, Copy)]
pub struct Skills {
    pub technical: &'static [&'static str],
    pub soft: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

/// One employment entry.
#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub roles: &'static [Role],
    pub honors: &'static [&'static str],
}

/// A headline metric shown with a project.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub metric: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub max_clock: &'static str,
    pub achievements: &'static [Achievement],
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
}

/// The whole portfolio.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioData {
    pub personal: Personal,
    pub about: About,
    pub education: Education,
    pub skills: Skills,
    pub experience: Experience,
    pub projects: &'static [Project],
    pub contact: Contact,
}

pub const PORTFOLIO: PortfolioData = PortfolioData {
    personal: Personal {
        name: "Vrushabh Vakhare",
        title: "ASIC Physical Design Engineer",
        description: "ASIC Design Expertise: Skilled in designing and optimizing integrated \
                      circuits, with proficiency in complex chip blocks, floor planning, power \
                      optimization, and timing closure. Proven ability to deliver high-quality \
                      designs on schedule, ensuring performance and manufacturability.",
        rotating_titles: &[
            "ASIC Physical Design Engineer",
            "5nm • 7nm • TSMC",
            "PD Flow | Full Chip & Block-Level",
            "Chip Layout & Timing Closure",
            "RTL to GDSII",
            "VLSI Backend Design",
        ],
    },
    about: About {
        description: "ASIC Physical Design Engineer with 3+ years of experience in 5nm and 7nm \
                      nodes. Skilled in full-flow backend implementation from Netlist to GDSII, \
                      with expertise in floorplanning, CTS, routing, STA, and signoff. Focused \
                      on PPA optimization and delivering clean, tapeout-ready designs.",
        highlights: &[
            "ASIC Design",
            "Power Planning",
            "Timing Closure",
            "5nm / 7nm",
            "RTL Collaboration",
            "Placement & Routing",
            "Clock Tree Synthesis (CTS)",
            "Static Timing Analysis (STA)",
            "High-Fanout Fixes",
        ],
    },
    education: Education {
        primary: SchoolRecord {
            degree: "Bachelor's in Engineering - Power Electronics",
            institution: "Vishwakarma Government Engineering College",
            score: "8.3 CGPA",
            duration: "2017 - 2021",
        },
        secondary: SchoolRecord {
            degree: "Diploma in Engineering - Power Electronics",
            institution: "Dr. S & S.S. Ghandhy College",
            score: "9.4 CGPA",
            duration: "2014 - 2017",
        },
    },
    skills: Skills {
        technical: &[
            "ASIC Physical Design",
            "Synopsys ICC2",
            "Synopsys Fusion Compiler",
            "Static Timing Analysis",
        ],
        soft: &[
            "Team Collaboration",
            "Problem Solving",
            "Continuous Learning",
            "Project Management",
            "Communication",
            "Dedication",
        ],
        languages: &["English", "Hindi", "Gujarati"],
        certifications: &[
            "VLSI Training - Physical Design - eInfochips Training & Research Academy Ltd",
        ],
    },
    experience: Experience {
        roles: &[
            Role {
                title: "Senior Physical Design Engineer",
                company: "Marvell Technology",
                duration: "Sep 2024 - Present",
            },
            Role {
                title: "Senior Physical Design Engineer",
                company: "Einfochips (An Arrow Company)",
                duration: "July 2024 - Sep 2024",
            },
            Role {
                title: "Physical Design Engineer Trainee",
                company: "Einfochips (An Arrow Company)",
                duration: "Jan 2021 - July 2024",
            },
        ],
        honors: &[
            "Core Value Award for Continuous Learning",
            "Best Team of the Year Award",
            "Publication: Power Analysis in 7nm Technology Node (2023)",
        ],
    },
    projects: &[
        Project {
            name: "Networking Chip (DPU) - 7nm TSMC, 16 Metal Layers",
            description: "High-performance networking chip design using 7nm TSMC technology with \
                          16 metal layers. Handled multimillion instance count with focus on \
                          timing, congestion, and memory-dominant blocks.",
            technologies: &[
                "7nm TSMC",
                "ICC2 Compiler",
                "Synopsys Prime-Time",
                "Calibre",
                "16 Metal Layers",
                "TCL Scripting",
                "Perl",
                "Linux",
            ],
            max_clock: "~1.2 GHz",
            achievements: &[
                Achievement { metric: "15%", label: "Timing Improvement" },
                Achievement { metric: "200+", label: "Macros Managed" },
                Achievement { metric: "2 GHz", label: "Critical Timing" },
            ],
        },
        Project {
            name: "Networking Chip (DPU) - 5nm TSMC, 18 Metal Layers",
            description: "Led physical design and signoff activities for High-Performance \
                          Computing ASICs using cutting-edge 5nm TSMC process technology with 18 \
                          metal layers.",
            technologies: &[
                "5nm TSMC",
                "Fusion Compiler",
                "Synopsys Primetime",
                "Calibre",
                "18 Metal Layers",
                "Advanced Node DFM",
                "Machine Learning Optimization",
            ],
            max_clock: "~1.2 GHz",
            achievements: &[
                Achievement { metric: "1.2 GHz", label: "Target Frequency" },
                Achievement { metric: "20%", label: "Early Timing Closure" },
                Achievement { metric: "6", label: "Blocks Completed" },
            ],
        },
    ],
    contact: Contact {
        email: "Vrushabhvakhare22@gmail.com",
        phone: "+91 7383975075",
        location: "Surat, Gujarat, India 394210",
        linkedin: "https://www.linkedin.com/in/vrushabh-vakhare-79081a18b/",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_record_is_populated() {
        assert!(!PORTFOLIO.personal.name.is_empty());
        assert!(PORTFOLIO.personal.rotating_titles.len() > 1);
        assert!(!PORTFOLIO.projects.is_empty());
        assert!(!PORTFOLIO.experience.roles.is_empty());
        assert_eq!(GREETINGS.len(), 20);
    }

    #[test]
    fn test_projects_carry_achievements() {
        for project in PORTFOLIO.projects {
            assert!(!project.achievements.is_empty(), "{}", project.name);
            assert!(!project.technologies.is_empty(), "{}", project.name);
        }
    }
}
