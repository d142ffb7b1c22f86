//! Fixed reply copy for each triage category, plus the crisis-card text.

use crate::base::types::{Category, Locale};

/// Opening line of every session.
pub const GREETING: &str =
    "Hello! I'm here to support you. How are you feeling today? You can share what's on your mind, and I'll do my best to help.";

/// Response text and suggestion chips for a category.
#[derive(Debug, Clone, Copy)]
pub struct ReplyTemplate {
    pub response: &'static str,
    pub suggestions: &'static [&'static str],
}

const CRISIS: ReplyTemplate = ReplyTemplate {
    response: "I'm very concerned about what you're sharing. These feelings are serious and you deserve immediate support. Please consider reaching out to a crisis helpline or scheduling an emergency appointment with a psychologist, psychiatrist, or other mental health professional. Would you like me to help you find someone to talk to right away?",
    suggestions: &["Find emergency support", "Schedule urgent appointment", "Crisis helpline numbers"],
};

const DEATH_IDEATION: ReplyTemplate = ReplyTemplate {
    response: "I'm deeply concerned about what you're sharing. Thoughts about death are serious and you don't have to face this alone. There are mental health professionals who specialize in helping people through these difficult times. Please consider reaching out for immediate support.",
    suggestions: &["Call crisis specialist", "Schedule emergency appointment", "Access crisis resources"],
};

const PSYCHOLOGY_REFERRAL: ReplyTemplate = ReplyTemplate {
    response: "Based on what you're describing, it sounds like you might benefit from working with a clinical psychologist. Psychologists specialize in understanding behavior patterns, cognitive processes, and can provide evidence-based treatments like cognitive-behavioral therapy (CBT). They can help you develop effective coping strategies and work through these challenges systematically.",
    suggestions: &["Find a psychologist", "Learn about CBT", "Schedule psychological assessment"],
};

const THERAPY_REFERRAL: ReplyTemplate = ReplyTemplate {
    response: "It sounds like you're dealing with some important relationship or life challenges. A licensed therapist who specializes in these areas could provide valuable support. Depending on your specific needs, you might also benefit from seeing a psychologist who can offer both therapy and psychological assessment if needed.",
    suggestions: &["Find a therapist", "Find a psychologist", "Explore counseling options"],
};

const SEVERE_OR_CHRONIC: ReplyTemplate = ReplyTemplate {
    response: "What you're experiencing sounds really challenging and it takes courage to share this. These symptoms would benefit greatly from professional support. A psychologist can provide comprehensive assessment and evidence-based treatments, while a therapist can offer ongoing counseling support. If medication might be helpful, a psychiatrist could also be part of your care team.",
    suggestions: &["Find a psychologist", "Find a therapist", "Learn about treatments", "Schedule consultation"],
};

const MILD_STRESS: ReplyTemplate = ReplyTemplate {
    response: "It sounds like you're dealing with some stress. Here are some strategies that might help: Practice deep breathing exercises, try the 5-4-3-2-1 grounding technique, maintain a regular sleep schedule, and engage in physical activity. If these feelings persist or worsen, consider talking to a psychologist or therapist who can provide personalized coping strategies.",
    suggestions: &["Try breathing exercises", "Practice mindfulness", "Improve sleep hygiene", "Consider seeing a psychologist"],
};

const GENERAL: ReplyTemplate = ReplyTemplate {
    response: "Thank you for sharing with me. I'm here to listen and support you. Can you tell me more about what's been on your mind lately? Understanding your situation better will help me provide more personalized guidance. If you feel like you need more support, both psychologists and therapists can provide professional help tailored to your specific needs.",
    suggestions: &["Tell me more", "Explore coping strategies", "Learn about psychology", "Find mental health support"],
};

/// Get the reply template for a category.
pub fn reply_for(category: Category) -> &'static ReplyTemplate {
    match category {
        Category::Crisis => &CRISIS,
        Category::DeathIdeation => &DEATH_IDEATION,
        Category::PsychologyReferral => &PSYCHOLOGY_REFERRAL,
        Category::TherapyReferral => &THERAPY_REFERRAL,
        Category::SevereOrChronic => &SEVERE_OR_CHRONIC,
        Category::MildStress => &MILD_STRESS,
        Category::General => &GENERAL,
    }
}

/// Localized copy shown on the crisis card.
#[derive(Debug, Clone, Copy)]
pub struct CrisisCopy {
    pub heading: &'static str,
    pub message: &'static str,
    pub resources_label: &'static str,
    pub resources: &'static str,
    pub call_label: &'static str,
    pub book_label: &'static str,
    pub emergency_label: &'static str,
    pub position_word: &'static str,
}

const CRISIS_COPY_EN: CrisisCopy = CrisisCopy {
    heading: "Immediate professional support available",
    message: "We're concerned about you. Here are crisis specialists who can help right now.",
    resources_label: "Crisis resources",
    resources: "988 Suicide & Crisis Lifeline | Crisis Text Line: 741741",
    call_label: "Call now - Emergency",
    book_label: "Book appointment",
    emergency_label: "Emergency care",
    position_word: "of",
};

const CRISIS_COPY_PT_BR: CrisisCopy = CrisisCopy {
    heading: "Suporte profissional imediato disponível",
    message: "Estamos preocupados com você. Aqui estão especialistas em crises que podem ajudar agora mesmo.",
    resources_label: "Recursos de crise",
    resources: "CVV 188 | SAMU 192 | Bombeiros 193",
    call_label: "Ligue agora - Emergência",
    book_label: "Agendar consulta",
    emergency_label: "Atende emergências",
    position_word: "de",
};

/// Get the crisis-card copy for a display locale.
pub fn crisis_copy(locale: Locale) -> &'static CrisisCopy {
    match locale {
        Locale::En => &CRISIS_COPY_EN,
        Locale::PtBr => &CRISIS_COPY_PT_BR,
    }
}
