#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalDetails {
    pub name: &'static str,
    pub short_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub static PERSONAL: PersonalDetails = PersonalDetails {
    name: "Md. Ziaul Haque",
    short_name: "Ziaul",
    email: "ziaul@haque.dev",
    phone: "+880 1XXX-XXXXXX",
    location: "Dhaka, Bangladesh",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Mobile,
    Web,
    Desktop,
}

impl Category {
    /// Filter tabs in display order
    pub const TABS: [Category; 4] = [
        Category::All,
        Category::Mobile,
        Category::Web,
        Category::Desktop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Mobile => "Mobile",
            Category::Web => "Web",
            Category::Desktop => "Desktop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech_stack: &'static [&'static str],
    pub category: Category,
    pub live_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "FinTech Wallet Pro",
        description: "A comprehensive digital banking solution with real-time transaction tracking and crypto integration.",
        image: "https://picsum.photos/seed/fintech/800/600",
        tech_stack: &["Flutter", "Dart", "Firebase", "Stripe API"],
        category: Category::Mobile,
        live_link: Some("#"),
        github_link: None,
    },
    Project {
        id: "2",
        title: "EduTrack Enterprise",
        description: "Corporate learning management system used by over 50,000 employees globally.",
        image: "https://picsum.photos/seed/edu/800/600",
        tech_stack: &["Flutter", "REST API", "Provider", "Sentry"],
        category: Category::Mobile,
        live_link: Some("#"),
        github_link: None,
    },
    Project {
        id: "3",
        title: "HealthFlow Sync",
        description: "Patient monitoring application with Bluetooth Low Energy integration for wearable devices.",
        image: "https://picsum.photos/seed/health/800/600",
        tech_stack: &["Flutter", "BLE", "SQLite", "Bloc"],
        category: Category::Mobile,
        live_link: None,
        github_link: Some("#"),
    },
    Project {
        id: "4",
        title: "MarketMaster Admin",
        description: "Inventory and sales management dashboard for multi-vendor e-commerce platforms.",
        image: "https://picsum.photos/seed/admin/800/600",
        tech_stack: &["Flutter Web", "Appwrite", "Riverpod"],
        category: Category::Web,
        live_link: Some("#"),
        github_link: None,
    },
];

/// Projects visible under `tab`, in catalog order.
pub fn filter_projects(tab: Category) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| tab == Category::All || p.category == tab)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Others,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Proficiency, 0 to 100
    pub level: u8,
    pub category: SkillCategory,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "Flutter", icon: "flutter", level: 98, category: SkillCategory::Frontend },
    Skill { name: "Dart", icon: "dart", level: 95, category: SkillCategory::Frontend },
    Skill { name: "Firebase", icon: "firebase", level: 90, category: SkillCategory::Backend },
    Skill { name: "Node.js", icon: "node", level: 85, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", icon: "sql", level: 80, category: SkillCategory::Backend },
    Skill { name: "Git / CI/CD", icon: "git", level: 92, category: SkillCategory::Tools },
    Skill { name: "REST / GraphQL", icon: "api", level: 94, category: SkillCategory::Tools },
    Skill { name: "UI/UX Design", icon: "design", level: 88, category: SkillCategory::Others },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Smartphone,
    Globe,
    Layers,
    Zap,
    Shield,
    Rocket,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Smartphone => "📱",
            ServiceIcon::Globe => "🌐",
            ServiceIcon::Layers => "🧱",
            ServiceIcon::Zap => "⚡",
            ServiceIcon::Shield => "🛡️",
            ServiceIcon::Rocket => "🚀",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            ServiceIcon::Smartphone => "text-blue-500",
            ServiceIcon::Globe => "text-indigo-500",
            ServiceIcon::Layers => "text-purple-500",
            ServiceIcon::Zap => "text-yellow-500",
            ServiceIcon::Shield => "text-green-500",
            ServiceIcon::Rocket => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "Cross-Platform Mobile Apps",
        description: "High-performance applications for iOS and Android using a single codebase with Flutter.",
        icon: ServiceIcon::Smartphone,
    },
    Service {
        title: "Web & Desktop Development",
        description: "Extending your mobile experience to the big screen with Flutter for Web, macOS, and Windows.",
        icon: ServiceIcon::Globe,
    },
    Service {
        title: "Architecture Consulting",
        description: "Helping teams set up scalable architectures like Clean Architecture, Bloc, or Riverpod.",
        icon: ServiceIcon::Layers,
    },
    Service {
        title: "Performance Optimization",
        description: "Deep profiling and optimization to achieve consistent 60/120 FPS in your Flutter apps.",
        icon: ServiceIcon::Zap,
    },
    Service {
        title: "Security Audits",
        description: "Ensuring your app data is protected with best practices in encryption and secure storage.",
        icon: ServiceIcon::Shield,
    },
    Service {
        title: "Fast-Track MVP",
        description: "Rapid prototyping and MVP development to get your product to market faster.",
        icon: ServiceIcon::Rocket,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub comment: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        name: "Sarah Jenkins",
        role: "CTO",
        company: "TechVentures Inc.",
        comment: "One of the best Flutter developers we have ever worked with. The attention to detail and ability to solve complex state management issues is unparalleled.",
        avatar: "https://picsum.photos/seed/sarah/100/100",
    },
    Testimonial {
        id: "t2",
        name: "Michael Chen",
        role: "Product Lead",
        company: "GrowthHub",
        comment: "Delivered our MVP 2 weeks ahead of schedule. The code quality is top-tier and the app runs smoothly on both iOS and Android.",
        avatar: "https://picsum.photos/seed/michael/100/100",
    },
    Testimonial {
        id: "t3",
        name: "Elena Rodriguez",
        role: "Founder",
        company: "Vitality Health",
        comment: "The user experience of the app exceeded our expectations. Our users love the fluid animations and intuitive navigation.",
        avatar: "https://picsum.photos/seed/elena/100/100",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub id: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", id: "about" },
    NavLink { name: "Skills", id: "skills" },
    NavLink { name: "Projects", id: "projects" },
    NavLink { name: "Services", id: "services" },
    NavLink { name: "Contact", id: "contact" },
];

pub static HIGHLIGHTS: &[&str] = &[
    "Expert Flutter & Dart",
    "Scalable Backend Integration",
    "CI/CD Implementation",
    "Complex UI/UX Animations",
    "State Management (Bloc/Riverpod)",
    "API & Service Integration",
];
