use crate::i18n::{I18n, Language};

/// Every page the app can show. The sidebar only lists a subset; the two
/// project pages are opened from the Games page cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Welcome,
    Interests,
    Favorites,
    Dreams,
    Skills,
    Experience,
    Games,
    BackendProjects,
    ThreeSins,
    SmileRecovery,
    Contact,
}

impl PageKind {
    /// The page that is always open and that the tab strip resets to.
    pub const DEFAULT: PageKind = PageKind::Welcome;

    pub fn label(self, i18n: I18n) -> &'static str {
        match self {
            Self::Welcome => i18n.page_welcome,
            Self::Interests => i18n.page_interests,
            Self::Favorites => i18n.page_favorites,
            Self::Dreams => i18n.page_dreams,
            Self::Skills => i18n.page_skills,
            Self::Experience => i18n.page_experience,
            Self::Games => i18n.page_games,
            Self::BackendProjects => i18n.page_backend_projects,
            Self::ThreeSins => i18n.page_three_sins,
            Self::SmileRecovery => i18n.page_smile_recovery,
            Self::Contact => i18n.page_contact,
        }
    }

    /// Prose pages are word-wrapped to the pane width; everything else
    /// renders its logical lines verbatim.
    pub fn reflow_enabled(self) -> bool {
        matches!(self, Self::Interests | Self::Favorites | Self::Dreams)
    }
}

/// Collapsible sidebar sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Home,
    SkillsExperience,
    Portfolio,
    Contact,
}

pub const SECTIONS: [SectionKind; 4] = [
    SectionKind::Home,
    SectionKind::SkillsExperience,
    SectionKind::Portfolio,
    SectionKind::Contact,
];

impl SectionKind {
    pub fn label(self, i18n: I18n) -> &'static str {
        match self {
            Self::Home => i18n.section_home,
            Self::SkillsExperience => i18n.section_skills_experience,
            Self::Portfolio => i18n.section_portfolio,
            Self::Contact => i18n.section_contact,
        }
    }

    pub fn pages(self) -> &'static [PageKind] {
        match self {
            Self::Home => &[
                PageKind::Welcome,
                PageKind::Interests,
                PageKind::Favorites,
                PageKind::Dreams,
            ],
            Self::SkillsExperience => &[PageKind::Skills, PageKind::Experience],
            Self::Portfolio => &[PageKind::Games, PageKind::BackendProjects],
            Self::Contact => &[PageKind::Contact],
        }
    }
}

/// Cosmetic code-language picks offered by the top-bar menu.
pub const CODE_LANGUAGES: [&str; 4] = ["C#", "Java", "Golang", "Python"];

// Placeholder tokens a page's logical lines can carry; the editor renderer
// expands them into non-text rows (logo strips, cards, carousels).
pub const TOKEN_UNITY_LOGO: &str = "[UNITY_LOGO]";
pub const TOKEN_PM_LOGOS: &str = "[PM_LOGOS]";
pub const TOKEN_FRAMEWORK_LOGOS: &str = "[FRAMEWORK_LOGOS]";
pub const TOKEN_DATABASE_LOGOS: &str = "[DATABASE_LOGOS]";
pub const TOKEN_MQ_LOGOS: &str = "[MQ_LOGOS]";
pub const TOKEN_GIT_LOGO: &str = "[GIT_LOGO]";
pub const TOKEN_PROJECT_CARDS: &str = "[PROJECT_CARDS]";
pub const TOKEN_PROJECT_MEDIA: &str = "[PROJECT_MEDIA]";
pub const TOKEN_CONTACT_EMAIL: &str = "[CONTACT_EMAIL]";
pub const TOKEN_CONTACT_DISCORD: &str = "[CONTACT_DISCORD]";
pub const TOKEN_CONTACT_LINKEDIN: &str = "[CONTACT_LINKEDIN]";
pub const TOKEN_CONTACT_INSTAGRAM: &str = "[CONTACT_INSTAGRAM]";

/// Logical lines for a page. Pure and total; an empty string is a blank
/// paragraph separator and always stays its own line.
pub fn page_lines(page: PageKind, language: Language) -> &'static [&'static str] {
    match (page, language) {
        (PageKind::Welcome, Language::ZhCn) => &[
            "Hello World —— 欢迎来到 Yve 的个人网站！",
            "她白天是软件工程师，晚上是独立开发者。",
            "",
            "你是 机器 🤖 还是 人类 👤？",
            "请从顶部栏选择你偏好的 语言 开始探索网站。 // 部分语言功能调试中",
            "",
            "有任何疑问？",
            "你可以通过邮箱联系她，或从左侧面板打开 联系方式 了解更多。",
        ],
        (PageKind::Welcome, Language::EnUs) => &[
            "Hello World — welcome to Yve's personal website!",
            "She is a software engineer by day and an indie builder by night.",
            "",
            "Are you a machine 🤖 or a human 👤?",
            "Please select your preferred Language from the top bar to begin exploring. // some language features under construction",
            "",
            "Have questions?",
            "Reach out via Email, or open Contact from the left panel for more info.",
        ],
        (PageKind::Interests, Language::ZhCn) => &[
            "虚拟/增强现实：",
            "她在这个领域的偶像是黄心健，希望能像他一样创作出震撼人心的艺术作品。",
            "",
            "游戏开发：",
            "她平时会用 Unity 尝试开发各种小项目 —— 随时欢迎合作或 Game Jam 组队！",
            "",
            "人工智能：",
            "她尤其关注 AI 在上述领域的开发过程中的应用，希望能提升开发者效率、降低创作门槛。",
        ],
        (PageKind::Interests, Language::EnUs) => &[
            "VR/AR: Her idol in this field is Hsin-Chien Huang, and she hopes to create artworks as emotionally powerful as his.",
            "",
            "Game Dev: She experiments with various small projects in Unity — and is always open to Game Jam collaborations!",
            "",
            "AI: She's especially interested in how AI can be applied to creative and product development in these fields, to improve developer efficiency and lower the barrier to creation.",
        ],
        (PageKind::Favorites, Language::ZhCn) => &[
            "最喜欢的游戏： 她喜欢《底特律：变人》那样以剧情核心、由玩家选择驱动的互动电影式游戏，也喜欢《锈湖》那样画风复古怪诞、风格鲜明的解密游戏；她不太喜欢MOBA、魂系等重操作的硬核游戏，因为她技术很菜。",
            "",
            "最喜欢的城市：  巴黎。因为她在那里度过了最无忧无虑的18岁，也是在那里她第一次真正理解\"生活不是竞技场\"，并下定决心转学重读她一直害怕的计算机科学专业（起初不敢学，是因为她中学理科考试从未赢过班里的竞赛生）。",
        ],
        (PageKind::Favorites, Language::EnUs) => &[
            "Favorite Game: She loves puzzle games like Rusty Lake for their retro, eerie and distinctive style, and story-driven interactive titles like Detroit: Become Human, where player choices shape the plot. She's not into hardcore games like MOBAs or Souls-likes — she's just bad at them.",
            "",
            "Favorite City: Paris. She spent her most carefree 18 there, and it was also where she first realized that life isn't a competition. Feeling inspired, she decided to transfer and restart in the field she once feared the most — Computer Science — a subject she'd avoided since middle school because she had never beaten the class's science competition kids.",
        ],
        (PageKind::Dreams, Language::ZhCn) => &[
            "她希望成为一名值得信赖的工程师，",
            "能与富有创意的艺术家们一起创造更多美好的作品。",
            "",
            "她想成为一个对社会有价值的人，",
            "她期待自己的作品能打动哪怕一小部分人，而非所有人。",
            "",
            "她并不是一个特别有野心的人 ——",
            "她不想改变世界，只想尽最大努力找到一个最适合她的位置。",
        ],
        (PageKind::Dreams, Language::EnUs) => &[
            "She hopes to become a trustworthy engineer, creating beautiful things together with imaginative and artistic minds.",
            "",
            "She wants to be someone of value to society, and hopes her work can touch a small group of people rather than everyone.",
            "",
            "She isn't a particularly ambitious person — she doesn't want to change the world, but hopes to find the place in it that fits her best.",
        ],
        (PageKind::Skills, Language::ZhCn) => &[
            "游戏开发：",
            "",
            TOKEN_UNITY_LOGO,
            "",
            TOKEN_PM_LOGOS,
            "",
            "",
            "后端开发：",
            "",
            TOKEN_FRAMEWORK_LOGOS,
            "",
            TOKEN_DATABASE_LOGOS,
            "",
            TOKEN_MQ_LOGOS,
            "",
            TOKEN_GIT_LOGO,
            "",
        ],
        (PageKind::Skills, Language::EnUs) => &[
            "Game Dev:",
            "",
            TOKEN_UNITY_LOGO,
            "",
            TOKEN_PM_LOGOS,
            "",
            "",
            "Backend Dev:",
            "",
            TOKEN_FRAMEWORK_LOGOS,
            "",
            TOKEN_DATABASE_LOGOS,
            "",
            TOKEN_MQ_LOGOS,
            "",
            TOKEN_GIT_LOGO,
            "",
        ],
        (PageKind::Experience, Language::ZhCn) => &[
            "教育背景：",
            "哥伦比亚大学   —  本科 计算机科学  // 在读",
            "欧洲高等商学院 —  本科 管理学     // 转学",
            "",
            "职业经历：",
            "字节跳动  —  后端开发 实习        // 2025年 5-8月",
            "育碧     —  项目管理 实习        // 2024年 5-8月",
        ],
        (PageKind::Experience, Language::EnUs) => &[
            "Education:",
            "Columbia University  —  B.A. in Computer Science  // Current Student",
            "ESCP Business School —  B.S. in Management        // Transferred",
            "",
            "Professional:",
            "ByteDance  —  SWE Intern        // May–Aug 2025",
            "Ubisoft    —  PM Intern         // May–Aug 2024",
        ],
        (PageKind::Games, _) => &[TOKEN_PROJECT_CARDS],
        (PageKind::BackendProjects, Language::ZhCn) => &["// 快了 —— 她最近在debug现实"],
        (PageKind::BackendProjects, Language::EnUs) => {
            &["// Coming soon — she's debugging reality (recently)"]
        }
        (PageKind::ThreeSins, _) | (PageKind::SmileRecovery, _) => &[TOKEN_PROJECT_MEDIA],
        (PageKind::Contact, _) => &[
            TOKEN_CONTACT_EMAIL,
            "",
            "",
            TOKEN_CONTACT_DISCORD,
            "",
            "",
            TOKEN_CONTACT_LINKEDIN,
            "",
            "",
            TOKEN_CONTACT_INSTAGRAM,
            "",
        ],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Logo {
    pub name: &'static str,
    pub path: &'static str,
    pub link: Option<&'static str>,
}

const fn logo(name: &'static str, path: &'static str) -> Logo {
    Logo {
        name,
        path,
        link: None,
    }
}

const UNITY_LOGOS: [Logo; 1] = [logo("Unity", "images/tech-logos/Unity.png")];
const PM_LOGOS: [Logo; 4] = [
    logo("Jira", "images/tech-logos/Jira.png"),
    logo("Miro", "images/tech-logos/Miro.png"),
    logo("Figma", "images/tech-logos/Figma.png"),
    logo("Lark", "images/tech-logos/Lark.png"),
];
const FRAMEWORK_LOGOS: [Logo; 2] = [
    logo("Spring Boot", "images/tech-logos/SpringBoot.png"),
    Logo {
        name: "Kitex(Go RPC)",
        path: "images/tech-logos/Kitex.png",
        link: Some("https://www.cloudwego.io/docs/kitex/"),
    },
];
const DATABASE_LOGOS: [Logo; 3] = [
    logo("MySQL", "images/tech-logos/MySQL.png"),
    logo("Redis", "images/tech-logos/Redis.png"),
    logo("MongoDB", "images/tech-logos/MongoDB.png"),
];
const MQ_LOGOS: [Logo; 3] = [
    logo("RocketMQ", "images/tech-logos/RocketMQ.png"),
    logo("RabbitMQ", "images/tech-logos/RabbitMQ.png"),
    logo("Kafka", "images/tech-logos/Kafka.png"),
];
const GIT_LOGOS: [Logo; 1] = [logo("Git", "images/tech-logos/Git.png")];

/// Maps a skills-page token to its logo strip and localized caption.
pub fn skills_logo_row(
    token: &str,
    language: Language,
) -> Option<(&'static [Logo], &'static str)> {
    let zh = language == Language::ZhCn;
    match token {
        TOKEN_UNITY_LOGO => Some((&UNITY_LOGOS, if zh { "游戏引擎" } else { "Game Engine" })),
        TOKEN_PM_LOGOS => Some((&PM_LOGOS, if zh { "项目管理/设计" } else { "PM/Design" })),
        TOKEN_FRAMEWORK_LOGOS => Some((&FRAMEWORK_LOGOS, if zh { "框架" } else { "Framework" })),
        TOKEN_DATABASE_LOGOS => Some((
            &DATABASE_LOGOS,
            if zh { "中间件/数据库" } else { "Middleware/DB" },
        )),
        TOKEN_MQ_LOGOS => Some((
            &MQ_LOGOS,
            if zh { "中间件/消息队列" } else { "Middleware/MQ" },
        )),
        TOKEN_GIT_LOGO => Some((
            &GIT_LOGOS,
            if zh {
                "运维开发/持续集成与部署"
            } else {
                "DevOps/CI/CD"
            },
        )),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Video {
        url: &'static str,
        thumbnail: &'static str,
    },
    Image {
        path: &'static str,
    },
}

impl MediaSlot {
    pub fn thumbnail(self) -> &'static str {
        match self {
            Self::Video { thumbnail, .. } => thumbnail,
            Self::Image { path } => path,
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, Self::Video { .. })
    }
}

pub const THREE_SINS_COVER: &str = "images/games/ThreeSins_cover.png";
pub const SMILE_RECOVERY_COVER: &str = "images/games/SmileRecovery_cover.png";

const THREE_SINS_MEDIA: [MediaSlot; 5] = [
    MediaSlot::Video {
        url: "https://www.youtube.com/watch?v=bpYohHgXvnE",
        thumbnail: THREE_SINS_COVER,
    },
    MediaSlot::Image {
        path: THREE_SINS_COVER,
    },
    MediaSlot::Image {
        path: "images/games/ThreeSins_content2.png",
    },
    MediaSlot::Image {
        path: "images/games/ThreeSins_content1.png",
    },
    MediaSlot::Image {
        path: "images/games/ThreeSins_content3.jpg",
    },
];

const SMILE_RECOVERY_MEDIA: [MediaSlot; 5] = [
    MediaSlot::Video {
        url: "https://www.bilibili.com/video/BV1Yi4y1p7gh/",
        thumbnail: "images/games/SmileRecovery_video.png",
    },
    MediaSlot::Image {
        path: SMILE_RECOVERY_COVER,
    },
    MediaSlot::Image {
        path: "images/games/SmileRecovery_content3.png",
    },
    MediaSlot::Image {
        path: "images/games/SmileRecovery_content1.png",
    },
    MediaSlot::Image {
        path: "images/games/SmileRecovery_content2.png",
    },
];

/// Everything the info panels on a project page show.
#[derive(Debug, Clone, Copy)]
pub struct ProjectInfo {
    pub jam_title: &'static str,
    pub genre: &'static str,
    pub tags: &'static str,
    pub platform: &'static str,
    pub theme: &'static str,
    pub project_page_label: &'static str,
    pub project_page_url: &'static str,
    pub award_line: Option<&'static str>,
    pub team_size: &'static str,
    pub role: &'static str,
    /// First line renders italic; empty strings are paragraph gaps.
    pub description: &'static [&'static str],
    pub media: &'static [MediaSlot],
}

pub fn project_info(page: PageKind, language: Language) -> Option<ProjectInfo> {
    match (page, language) {
        (PageKind::ThreeSins, Language::ZhCn) => Some(ProjectInfo {
            jam_title: "Global Game Jam 2025",
            genre: "2D、动作冒险、平台跳跃",
            tags: "休闲、象征隐喻",
            platform: "Windows",
            theme: "Bubble",
            project_page_label: "globalgamejam.org/games/2025/three-sins-4",
            project_page_url: "https://globalgamejam.org/games/2025/three-sins-4",
            award_line: None,
            team_size: "11",
            role: "程序员",
            description: &[
                "泡沫是幻妄。泡沫是执念。泡沫是痴梦。戳破他们！",
                "",
                "你从沉睡中醒来，却发现所有人都陷入梦中——",
                "他们执着于种种幻象与欲望，就像被困在培养皿里的大脑。",
                "你决定潜入他们的「意识之海」，去唤醒他们。",
                "",
                "玩家将使用 WASD 控制自己泡沫化的潜意识，在梦境中前行，",
                "通过触及他人的核心贪欲来解放他们。",
                "途中要小心避开尖刺，合理使用强化道具！",
                "但请记住——你保持清醒的时间有限。",
            ],
            media: &THREE_SINS_MEDIA,
        }),
        (PageKind::ThreeSins, Language::EnUs) => Some(ProjectInfo {
            jam_title: "Global Game Jam 2025",
            genre: "2D, Action-Adventure, Platformer",
            tags: "Casual, Symbolism",
            platform: "Windows",
            theme: "Bubble",
            project_page_label: "globalgamejam.org/games/2025/three-sins-4",
            project_page_url: "https://globalgamejam.org/games/2025/three-sins-4",
            award_line: None,
            team_size: "11",
            role: "Programmer",
            description: &[
                "Bubble is delusion. Bubble is obsession. Bubble is dream. WAKE THEM UP!",
                "",
                "You wake up from your sleep to find everyone asleep, holding on to all sorts of obsessions and dreams, like a brain in a vat. You decide to dive into their \"sea of consciousness\" and wake them up. ......",
                "",
                "Players use WASD to control their bubbled subconscious self and free the others by reaching their deepest obsessions. Avoid any spikes and use power-ups wisely! But remember, you only have limited time to keep conscious!",
            ],
            media: &THREE_SINS_MEDIA,
        }),
        (PageKind::SmileRecovery, Language::ZhCn) => Some(ProjectInfo {
            jam_title: "Global Game Jam 2024",
            genre: "2D、点触解谜、推理",
            tags: "心理、现实、剪纸画风",
            platform: "Windows",
            theme: "Make Me Laugh",
            project_page_label: "itch.io",
            project_page_url: "https://lichbird.itch.io/2",
            award_line: Some("🏆 冠军 — 成都站，本地新闻报道"),
            team_size: "7",
            role: "音乐音效",
            description: &[
                "孩子不笑了怎么办？笑脸医生来帮您！",
                "",
                "玩家将会扮演一名医生，帮助家长\"治愈\"他们的问题孩子，让他们重新绽放笑容。",
                "利用你手中的剪刀与胶水，深入每个孩子的故事，揭开他们沉默背后的秘密。",
                "",
                "在手帐般的关卡场景中，你需要从环境中剪切、粘贴线索，拼出一幅残缺的拼图——",
                "每一块拼图都映射着孩子的思绪、痛苦，或他们失笑的根源。",
                "",
                "然而，当你一块块拼合他们的笑脸时，一个问题渐渐浮现：",
                "你是在真正治愈他们，还是在塑造一个家长所期望的\"完美孩子\"？",
                "人究竟是为何而笑？又该为何而笑？",
            ],
            media: &SMILE_RECOVERY_MEDIA,
        }),
        (PageKind::SmileRecovery, Language::EnUs) => Some(ProjectInfo {
            jam_title: "Global Game Jam 2024",
            genre: "2D, Point-and-Click Puzzle, Mystery",
            tags: "Psychological, Realism, Handcrafted Art",
            platform: "Windows",
            theme: "Make Me Laugh",
            project_page_label: "itch.io",
            project_page_url: "https://lichbird.itch.io/2",
            award_line: Some("🏆 1st Place — Chengdu Site, Featured on local news"),
            team_size: "7",
            role: "Audio Designer",
            description: &[
                "What if your child stopped smiling? Don't worry — the Smile Doctor is here to help.",
                "",
                "In Smile Recovery, you play as a doctor who helps parents \"cure\" their troubled children and bring back their lost smiles. Using your trusty scissors and glue, you'll dive into each story and uncover the secrets behind every child's silence.",
                "",
                "Within the scrapbook-like stages, you cut and paste clues from the environment to complete the missing pieces of a puzzle — each piece reflecting a fragment of the child's thoughts, their pain, or the root cause of their sorrow.",
                "",
                "Yet as you stitch their faces back together, a question begins to surface: Are you truly healing them — or simply shaping them into what their parents desire? What makes a person smile? And what should they smile for?",
            ],
            media: &SMILE_RECOVERY_MEDIA,
        }),
        _ => None,
    }
}

pub const AWARD_NEWS_URL: &str =
    "https://cbgc.scol.com.cn/news/4724964?from=androidapp&app_id=cbgc&localTimeStamp=1706518167757";

/// A card on the Games page.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCard {
    pub page: PageKind,
    pub cover: &'static str,
    pub jam_title: &'static str,
    pub award: bool,
}

pub const PROJECT_CARDS: [ProjectCard; 2] = [
    ProjectCard {
        page: PageKind::ThreeSins,
        cover: THREE_SINS_COVER,
        jam_title: "Global Game Jam 2025",
        award: false,
    },
    ProjectCard {
        page: PageKind::SmileRecovery,
        cover: SMILE_RECOVERY_COVER,
        jam_title: "Global Game Jam 2024",
        award: true,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactEntry {
    pub icon: &'static str,
    pub platform: &'static str,
    pub account: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Maps a contact-page token to its card.
pub fn contact_entry(token: &str, language: Language) -> Option<ContactEntry> {
    let zh = language == Language::ZhCn;
    match token {
        TOKEN_CONTACT_EMAIL => Some(ContactEntry {
            icon: "images/contact-icons/Gmail.png",
            platform: if zh { "邮箱" } else { "Email" },
            account: "yvehu02@gmail.com",
            description: if zh {
                "// 直接发消息或正式合作"
            } else {
                "// For direct messages or formal collaboration"
            },
            url: "mailto:yvehu02@gmail.com",
        }),
        TOKEN_CONTACT_DISCORD => Some(ContactEntry {
            icon: "images/contact-icons/Discord.png",
            platform: "Discord",
            account: "jesuisyve02",
            description: if zh {
                "// 首选如果想Game Jam组队！"
            } else {
                "// Preferred if for Game Jam team-ups!"
            },
            url: "https://discord.com/users/967253583093448774",
        }),
        TOKEN_CONTACT_LINKEDIN => Some(ContactEntry {
            icon: "images/contact-icons/Linkedin.png",
            platform: if zh { "领英" } else { "Linkedin" },
            account: "www.linkedin.com/in/yvehu",
            description: if zh {
                "// 在此了解更多她的背景"
            } else {
                "// To learn more about her background"
            },
            url: "https://www.linkedin.com/in/yvehu/",
        }),
        TOKEN_CONTACT_INSTAGRAM => Some(ContactEntry {
            icon: "images/contact-icons/Instagram.png",
            platform: "Instagram",
            account: "yveh.34",
            description: if zh {
                "// 如果你想在纽约一起喝杯咖啡~"
            } else {
                "// If you'd like to grab a coffee in New York~"
            },
            url: "https://www.instagram.com/yveh.34/",
        }),
        _ => None,
    }
}

/// Every image the app may show, preloaded fire-and-forget at startup.
pub const PRELOAD_IMAGES: [&str; 24] = [
    "images/tech-logos/Unity.png",
    "images/tech-logos/Jira.png",
    "images/tech-logos/Miro.png",
    "images/tech-logos/Figma.png",
    "images/tech-logos/Lark.png",
    "images/tech-logos/SpringBoot.png",
    "images/tech-logos/Kitex.png",
    "images/tech-logos/MySQL.png",
    "images/tech-logos/Redis.png",
    "images/tech-logos/MongoDB.png",
    "images/tech-logos/RocketMQ.png",
    "images/tech-logos/RabbitMQ.png",
    "images/tech-logos/Kafka.png",
    "images/tech-logos/Git.png",
    "images/tech-logos/Csharp.png",
    "images/games/ThreeSins_cover.png",
    "images/games/ThreeSins_content1.png",
    "images/games/ThreeSins_content2.png",
    "images/games/ThreeSins_content3.jpg",
    "images/games/SmileRecovery_cover.png",
    "images/games/SmileRecovery_content1.png",
    "images/games/SmileRecovery_content2.png",
    "images/games/SmileRecovery_content3.png",
    "images/games/SmileRecovery_video.png",
];

pub const CONTACT_ICONS: [&str; 4] = [
    "images/contact-icons/Gmail.png",
    "images/contact-icons/Discord.png",
    "images/contact-icons/Linkedin.png",
    "images/contact-icons/Instagram.png",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_total_for_every_page_and_language() {
        let pages = [
            PageKind::Welcome,
            PageKind::Interests,
            PageKind::Favorites,
            PageKind::Dreams,
            PageKind::Skills,
            PageKind::Experience,
            PageKind::Games,
            PageKind::BackendProjects,
            PageKind::ThreeSins,
            PageKind::SmileRecovery,
            PageKind::Contact,
        ];
        for page in pages {
            for language in [Language::EnUs, Language::ZhCn] {
                assert!(
                    !page_lines(page, language).is_empty(),
                    "{page:?}/{language:?} has no content"
                );
            }
        }
    }

    #[test]
    fn project_info_only_for_project_pages() {
        assert!(project_info(PageKind::ThreeSins, Language::EnUs).is_some());
        assert!(project_info(PageKind::SmileRecovery, Language::ZhCn).is_some());
        assert!(project_info(PageKind::Games, Language::EnUs).is_none());
        assert!(project_info(PageKind::Welcome, Language::ZhCn).is_none());
    }

    #[test]
    fn project_media_leads_with_the_video_slot() {
        for page in [PageKind::ThreeSins, PageKind::SmileRecovery] {
            let info = project_info(page, Language::EnUs).unwrap();
            assert_eq!(info.media.len(), 5);
            assert!(info.media[0].is_video());
            assert!(info.media[1..].iter().all(|slot| !slot.is_video()));
        }
    }

    #[test]
    fn preload_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for path in PRELOAD_IMAGES {
            assert!(seen.insert(path), "duplicate preload entry: {path}");
        }
    }

    #[test]
    fn skills_tokens_resolve_in_both_languages() {
        for token in [
            TOKEN_UNITY_LOGO,
            TOKEN_PM_LOGOS,
            TOKEN_FRAMEWORK_LOGOS,
            TOKEN_DATABASE_LOGOS,
            TOKEN_MQ_LOGOS,
            TOKEN_GIT_LOGO,
        ] {
            for language in [Language::EnUs, Language::ZhCn] {
                let (logos, caption) = skills_logo_row(token, language).unwrap();
                assert!(!logos.is_empty());
                assert!(!caption.is_empty());
            }
        }
        assert!(skills_logo_row("plain text", Language::EnUs).is_none());
    }
}
