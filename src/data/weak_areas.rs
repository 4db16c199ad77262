use crate::data::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Youtube,
    Article,
}

impl ResourceKind {
    pub fn action(self) -> &'static str {
        match self {
            Self::Youtube => "Watch Video",
            Self::Article => "Read Article",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakAreaDetail {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub why_it_matters: &'static str,
    pub quick_action: &'static str,
    pub resource: Resource,
    pub tool: Tool,
}

pub static WEAK_AREA_DETAILS: [WeakAreaDetail; 6] = [
    WeakAreaDetail {
        category: Category::TimeManagement,
        title: "Time Blindness",
        description: "Difficulty tracking time while using digital devices",
        why_it_matters: "Losing track of time while on your phone reduces productivity and increases stress. It can leave you feeling like the day slipped away without accomplishing what matters most.",
        quick_action: "Check your daily screen-time report each evening and set a realistic goal for tomorrow.",
        resource: Resource {
            kind: ResourceKind::Youtube,
            title: "How to Stop Wasting Time on Your Phone",
            url: "https://www.youtube.com/watch?v=NUMa0QkPzns",
        },
        tool: Tool {
            name: "RescueTime",
            url: "https://www.rescuetime.com",
        },
    },
    WeakAreaDetail {
        category: Category::Notifications,
        title: "Notification Dependency",
        description: "Compulsion to check and respond to alerts immediately",
        why_it_matters: "Frequent alerts interrupt your concentration and make it harder to enter deep focus. Each notification can take several minutes to fully recover from mentally.",
        quick_action: "Disable non-essential app notifications right now. Keep only calls and messages from important contacts.",
        resource: Resource {
            kind: ResourceKind::Youtube,
            title: "How Notifications Hijack Your Focus",
            url: "https://www.youtube.com/watch?v=VpHyLG-sc4g",
        },
        tool: Tool {
            name: "Do Not Disturb Mode",
            url: "https://support.google.com/android/answer/9069335",
        },
    },
    WeakAreaDetail {
        category: Category::Scrolling,
        title: "Mindless Scrolling",
        description: "Automatic, purposeless browsing through content",
        why_it_matters: "Scrolling often becomes an automatic habit rather than a conscious choice. This passive consumption can leave you feeling drained without any real satisfaction.",
        quick_action: "Before opening any social app, pause and ask yourself: \"What am I looking for?\" If you don't have an answer, don't open it.",
        resource: Resource {
            kind: ResourceKind::Youtube,
            title: "How to Break the Scrolling Habit",
            url: "https://www.youtube.com/watch?v=9z8_YhWoMao",
        },
        tool: Tool {
            name: "StayFocusd",
            url: "https://chrome.google.com/webstore/detail/stayfocusd/laankejkbhbdhmipfmgcngdelahlfoji",
        },
    },
    WeakAreaDetail {
        category: Category::Avoidance,
        title: "Digital Procrastination",
        description: "Using devices to escape difficult or boring tasks",
        why_it_matters: "Using your phone to avoid difficult tasks provides temporary relief but increases long-term stress. The avoided task doesn't go away, it just gets harder to start.",
        quick_action: "When you catch yourself reaching for your phone to avoid work, commit to just 5 minutes on the avoided task first.",
        resource: Resource {
            kind: ResourceKind::Article,
            title: "Understanding Digital Procrastination",
            url: "https://www.psychologytoday.com/us/basics/procrastination",
        },
        tool: Tool {
            name: "Pomodoro Timer",
            url: "https://pomofocus.io",
        },
    },
    WeakAreaDetail {
        category: Category::Anxiety,
        title: "Urgency & FOMO",
        description: "Fear of missing out and compulsive checking behavior",
        why_it_matters: "Feeling compelled to respond immediately creates constant low-level stress. This urgency is often artificial; most messages don't require instant replies.",
        quick_action: "Practice delaying your responses by 30 minutes. Notice that the world doesn't end when you don't reply instantly.",
        resource: Resource {
            kind: ResourceKind::Youtube,
            title: "Understanding FOMO and Digital Anxiety",
            url: "https://www.youtube.com/watch?v=nqHmD8UNCk4",
        },
        tool: Tool {
            name: "Scheduled Do Not Disturb",
            url: "https://support.apple.com/guide/iphone/turn-do-not-disturb-on-or-off-iph5c3f5b77b/ios",
        },
    },
    WeakAreaDetail {
        category: Category::Multitasking,
        title: "Multitasking Overload",
        description: "Constantly switching between apps and tasks",
        why_it_matters: "Switching between apps and tabs fragments your attention. Research shows it takes an average of 23 minutes to fully refocus after an interruption.",
        quick_action: "Close all tabs except the one you're actively using. Work on one task until it's complete before switching.",
        resource: Resource {
            kind: ResourceKind::Youtube,
            title: "The Myth of Multitasking",
            url: "https://www.youtube.com/watch?v=tMiOCDA1u-8",
        },
        tool: Tool {
            name: "Forest App",
            url: "https://www.forestapp.cc",
        },
    },
];

pub fn detail_for(category: Category) -> Option<&'static WeakAreaDetail> {
    WEAK_AREA_DETAILS
        .iter()
        .find(|detail| detail.category == category)
}

/// Area names used by the submitted assessment record, keyed per question.
/// These do not follow the category labels: anxiety-flavoured notification
/// questions map to "Urgency & FOMO", for example.
pub fn record_area_name(question_id: u32) -> Option<&'static str> {
    let name = match question_id {
        1 => "Notification Dependency",
        2 | 6 => "Multitasking Habits",
        3 | 4 | 8 => "Mindless Scrolling",
        5 | 12 => "Digital Procrastination",
        7 => "Urgency & FOMO",
        9 => "Phone Anxiety",
        10 | 11 => "Time Blindness",
        _ => return None,
    };
    Some(name)
}
