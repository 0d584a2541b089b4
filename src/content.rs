use crate::models::{Badge, BadgeLevel, Module};

/// The five learning modules, in list order. `badge_id` is the per-module
/// badge the award pass hands out once the module is completed.
pub const MODULES: [Module; 5] = [
    Module {
        id: "password-security",
        title: "Password Security",
        description: "Learn about creating and managing strong passwords",
        icon: "🔑",
        badge_id: "passwordMaster",
    },
    Module {
        id: "secure-auth",
        title: "Secure Authentication",
        description: "Understanding multi-factor authentication and biometrics",
        icon: "🛡️",
        badge_id: "authenticationPro",
    },
    Module {
        id: "transaction-safety",
        title: "Transaction Safety",
        description: "How to ensure your transactions are secure",
        icon: "💳",
        badge_id: "transactionMaster",
    },
    Module {
        id: "device-security",
        title: "Device Security",
        description: "Keeping your device and app secure",
        icon: "📱",
        badge_id: "deviceGuardian",
    },
    Module {
        id: "phishing-prevention",
        title: "Phishing Prevention",
        description: "Identifying and avoiding security threats",
        icon: "🎯",
        badge_id: "phishingDetective",
    },
];

pub fn module(module_id: &str) -> Option<&'static Module> {
    MODULES.iter().find(|m| m.id == module_id)
}

/// Milestone badge ids, gated on aggregate completed-module counts.
pub const BADGE_TRAINEE: &str = "securityTrainee";
pub const BADGE_APPRENTICE: &str = "securityApprentice";
pub const BADGE_EXPERT: &str = "securityExpert";

/// Fixed badge catalog. `perfectionist` ships in the catalog but no award
/// rule hands it out.
pub const BADGES: [Badge; 9] = [
    Badge {
        id: "securityTrainee",
        title: "Security Trainee",
        description: "Completed your first security module",
        icon: "🔰",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "passwordMaster",
        title: "Password Master",
        description: "Mastered password security concepts",
        icon: "🔑",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "transactionMaster",
        title: "Transaction Safety Expert",
        description: "Mastered transaction safety concepts",
        icon: "💰",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "authenticationPro",
        title: "Authentication Pro",
        description: "Mastered multi-factor authentication",
        icon: "🛡️",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "deviceGuardian",
        title: "Device Guardian",
        description: "Completed all device security checks",
        icon: "📱",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "phishingDetective",
        title: "Phishing Detective",
        description: "Expert at identifying phishing attempts",
        icon: "🎯",
        level: BadgeLevel::Bronze,
    },
    Badge {
        id: "securityApprentice",
        title: "Security Apprentice",
        description: "Completed any three security modules",
        icon: "⭐",
        level: BadgeLevel::Silver,
    },
    Badge {
        id: "securityExpert",
        title: "Security Expert",
        description: "Completed all security modules",
        icon: "🌟",
        level: BadgeLevel::Gold,
    },
    Badge {
        id: "perfectionist",
        title: "Security Perfectionist",
        description: "Achieved perfect scores in all modules",
        icon: "👑",
        level: BadgeLevel::Gold,
    },
];

pub fn badge(badge_id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == badge_id)
}

// --- Lesson content ---

pub struct MfaMethod {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// 1..=5, shown as filled dots.
    pub strength_level: u8,
}

pub const MFA_TYPES: [MfaMethod; 4] = [
    MfaMethod {
        id: "authenticator",
        title: "Authenticator App",
        description: "Most secure method. Uses time-based codes that change every 30 seconds.",
        strength_level: 5,
    },
    MfaMethod {
        id: "biometric",
        title: "Biometric",
        description: "Very secure and convenient. Uses your unique biological features.",
        strength_level: 4,
    },
    MfaMethod {
        id: "security-key",
        title: "Security Key",
        description: "Physical key that must be present for authentication.",
        strength_level: 4,
    },
    MfaMethod {
        id: "sms",
        title: "SMS Code",
        description: "Less secure due to potential SMS interception.",
        strength_level: 2,
    },
];

pub struct TransactionScenario {
    pub title: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub recipient: &'static str,
    pub location: &'static str,
    pub time: &'static str,
    pub frequency: &'static str,
    pub red_flags: &'static [&'static str],
    pub risky: bool,
}

pub const SCENARIOS: [TransactionScenario; 3] = [
    TransactionScenario {
        title: "Unusual Amount",
        description: "A transfer that is significantly larger than your typical transactions.",
        amount: "$5,000",
        recipient: "Unknown Trading Ltd.",
        location: "Foreign Country",
        time: "3:45 AM",
        frequency: "First time transaction",
        red_flags: &[
            "Large amount compared to usual transactions",
            "First-time recipient",
            "Unusual hour for transaction",
            "Foreign location",
        ],
        risky: true,
    },
    TransactionScenario {
        title: "Regular Payment",
        description: "Monthly utility bill payment to a known company.",
        amount: "$85",
        recipient: "City Power & Utilities",
        location: "Local",
        time: "2:15 PM",
        frequency: "Monthly recurring",
        red_flags: &[],
        risky: false,
    },
    TransactionScenario {
        title: "Suspicious Pattern",
        description: "Multiple small transactions in quick succession.",
        amount: "$49.99 (×5)",
        recipient: "Digital Goods Store",
        location: "Multiple locations",
        time: "Last 5 minutes",
        frequency: "Multiple attempts",
        red_flags: &[
            "Multiple transactions in short time",
            "Same amount repeated",
            "Different locations",
            "Unusual pattern",
        ],
        risky: true,
    },
];

pub enum MessageKind {
    Email,
    Sms,
}

pub struct PhishingExample {
    pub kind: MessageKind,
    pub title: &'static str,
    pub from: &'static str,
    pub subject: Option<&'static str>,
    pub body: &'static str,
    pub time: &'static str,
    pub suspicious: bool,
    pub indicators: &'static [&'static str],
}

pub const PHISHING_EXAMPLES: [PhishingExample; 3] = [
    PhishingExample {
        kind: MessageKind::Email,
        title: "Account Security Alert",
        from: "security@accounts-verify.com",
        subject: Some("Urgent: Account Access Limited"),
        body: "Dear valued customer,\n\nWe have detected unusual activity on your account. \
               To prevent unauthorized access, your account has been temporarily limited. \
               Click here to verify your identity: http://secure-verify-accounts.com/restore",
        time: "3:45 AM",
        suspicious: true,
        indicators: &[
            "Unofficial email domain",
            "Generic greeting",
            "Urgent action required",
            "Suspicious link",
            "Unusual timing",
        ],
    },
    PhishingExample {
        kind: MessageKind::Sms,
        title: "Package Delivery",
        from: "+1-555-0123",
        subject: None,
        body: "Your package is held at customs. Pay a small fee (2.99$) to release: \
               http://track-delivery.co/pay",
        time: "Just now",
        suspicious: true,
        indicators: &[
            "Unexpected delivery",
            "Request for payment",
            "Shortened URL",
            "Unknown sender",
        ],
    },
    PhishingExample {
        kind: MessageKind::Email,
        title: "Bank Statement",
        from: "statements@mybank.com",
        subject: Some("Your Monthly Statement is Ready"),
        body: "Your account statement for the period ending April 15, 2025 is now available \
               in your online banking portal. Sign in to your account to view: \
               https://mybank.com/statements",
        time: "9:00 AM",
        suspicious: false,
        indicators: &[
            "Official bank domain",
            "No urgent action required",
            "Directs to official website",
            "Expected monthly communication",
        ],
    },
];

pub struct ChecklistItem {
    pub title: &'static str,
    pub description: &'static str,
    pub critical: bool,
}

pub struct ChecklistSection {
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

pub const SECURITY_CHECKS: [ChecklistSection; 4] = [
    ChecklistSection {
        title: "Lock Screen Security",
        items: &[
            ChecklistItem {
                title: "Use Biometric Lock",
                description: "Enable fingerprint or face recognition for maximum security.",
                critical: true,
            },
            ChecklistItem {
                title: "Strong Passcode",
                description: "Use at least 6 digits, avoid simple patterns.",
                critical: true,
            },
            ChecklistItem {
                title: "Quick Lock",
                description: "Set screen to lock immediately after sleep.",
                critical: false,
            },
        ],
    },
    ChecklistSection {
        title: "App Permissions",
        items: &[
            ChecklistItem {
                title: "Camera Access",
                description: "Only allow camera access to necessary apps.",
                critical: true,
            },
            ChecklistItem {
                title: "Location Services",
                description: "Review which apps can access your location.",
                critical: true,
            },
            ChecklistItem {
                title: "Microphone Access",
                description: "Limit microphone access to trusted apps.",
                critical: false,
            },
        ],
    },
    ChecklistSection {
        title: "System Updates",
        items: &[
            ChecklistItem {
                title: "Auto Updates",
                description: "Enable automatic system updates.",
                critical: true,
            },
            ChecklistItem {
                title: "App Updates",
                description: "Regularly update all installed apps.",
                critical: true,
            },
            ChecklistItem {
                title: "Security Patches",
                description: "Install security updates promptly.",
                critical: true,
            },
        ],
    },
    ChecklistSection {
        title: "Network Security",
        items: &[
            ChecklistItem {
                title: "Avoid Public WiFi",
                description: "Use mobile data or VPN on public networks.",
                critical: true,
            },
            ChecklistItem {
                title: "WiFi Security",
                description: "Use WPA3 encryption on home network.",
                critical: true,
            },
            ChecklistItem {
                title: "Bluetooth Settings",
                description: "Turn off Bluetooth when not in use.",
                critical: false,
            },
        ],
    },
];

pub const PASSWORD_TIPS: [&str; 5] = [
    "Use at least 12 characters",
    "Mix uppercase and lowercase letters",
    "Include numbers and special characters",
    "Avoid personal information",
    "Use unique passwords for each account",
];
