//! Static guidance tables keyed by recommendation

use serde::Serialize;

use crate::assessment::Recommendation;

/// Narrative bundle for one recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub title: &'static str,
    pub description: &'static str,
    pub next_steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlternativeCareer {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub provider: &'static str,
    pub kind: &'static str,
}

/// Landing content describing the role and what the assessment covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleOverview {
    pub headline: &'static str,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub coverage: &'static [(&'static str, &'static str)],
}

const ACCEPT_GUIDANCE: Guidance = Guidance {
    title: "Excellent Fit!",
    description: "You have strong potential to succeed as a Digital Payments Architect. Your analytical skills, technical aptitude, and interest in the field align well with this career path.",
    next_steps: &[
        "Begin with PCI-DSS and payment security fundamentals",
        "Learn API integration with Stripe or similar platforms",
        "Study financial regulations (PSD2, KYC/AML)",
        "Build a portfolio project with payment integration",
    ],
};

const CONDITIONAL_GUIDANCE: Guidance = Guidance {
    title: "Good Potential",
    description: "You show promise for this field but may need to strengthen certain areas. Focus on the improvement areas highlighted below.",
    next_steps: &[
        "Strengthen your technical foundations in APIs",
        "Take an introductory fintech course",
        "Practice system design problems",
        "Network with professionals in payments industry",
    ],
};

const REJECT_GUIDANCE: Guidance = Guidance {
    title: "Consider Alternatives",
    description: "While this specific role may not be ideal, consider related careers that might be a better fit for your profile.",
    next_steps: &[
        "Explore Business Analyst roles in fintech",
        "Consider Product Management in payments",
        "Look into Compliance or Risk Management",
        "Develop foundational technical skills first",
    ],
};

pub const ALTERNATIVE_CAREERS: [AlternativeCareer; 4] = [
    AlternativeCareer {
        title: "Fintech Product Manager",
        description: "Drive payment product strategy and roadmaps",
    },
    AlternativeCareer {
        title: "API Integration Engineer",
        description: "Focus on technical integrations and partnerships",
    },
    AlternativeCareer {
        title: "Compliance Analyst",
        description: "Ensure regulatory adherence in financial systems",
    },
    AlternativeCareer {
        title: "Risk & Fraud Analyst",
        description: "Develop systems to detect and prevent fraud",
    },
];

pub const LEARNING_RESOURCES: [LearningResource; 4] = [
    LearningResource {
        title: "Payment Systems Fundamentals",
        provider: "Coursera",
        kind: "Course",
    },
    LearningResource {
        title: "PCI-DSS Implementation Guide",
        provider: "PCI Security Standards",
        kind: "Documentation",
    },
    LearningResource {
        title: "Stripe Developer Documentation",
        provider: "Stripe",
        kind: "Hands-on",
    },
    LearningResource {
        title: "Digital Payments Architecture",
        provider: "Udemy",
        kind: "Course",
    },
];

pub const ROLE_OVERVIEW: RoleOverview = RoleOverview {
    headline: "Should You Become a Digital Payments Architect?",
    summary: "Digital Payments Architects design and implement secure, scalable payment systems that process millions of transactions daily. They work at the intersection of finance, technology, and security.",
    responsibilities: &[
        "Design end-to-end payment flows and integrations",
        "Ensure compliance with financial regulations (PCI-DSS, PSD2)",
        "Build scalable, real-time transaction infrastructure",
        "Implement fraud detection and security measures",
    ],
    coverage: &[
        (
            "Psychometric Analysis",
            "Personality traits, cognitive preferences, and motivational drivers",
        ),
        (
            "Technical Readiness",
            "Knowledge of payment systems, security protocols, and architecture concepts",
        ),
        (
            "Career Fit Analysis",
            "WISCAR: Will, Interest, Skill, Cognitive ability, Ability to learn, Real-world alignment",
        ),
    ],
};

impl Recommendation {
    /// Narrative bundle for this recommendation
    pub fn guidance(&self) -> &'static Guidance {
        match self {
            Recommendation::Accept => &ACCEPT_GUIDANCE,
            Recommendation::Conditional => &CONDITIONAL_GUIDANCE,
            Recommendation::Reject => &REJECT_GUIDANCE,
        }
    }

    /// Short badge text
    pub fn badge(&self) -> &'static str {
        match self {
            Recommendation::Accept => "Recommended",
            Recommendation::Conditional => "Conditional",
            Recommendation::Reject => "Not Recommended",
        }
    }

    /// Alternative careers are listed for everything but Accept
    pub fn shows_alternatives(&self) -> bool {
        !matches!(self, Recommendation::Accept)
    }
}
