//! Canned example messages offered at each step.

use super::OnboardingStep;

pub fn conversation_starters(step: OnboardingStep) -> &'static [&'static str] {
    match step {
        OnboardingStep::Basic => &[
            "Hi! I'm Dr. John Doe",
            "I have MBBS and MD degrees",
            "I specialize in Cardiology",
            "My phone number is +91-9876543210",
        ],
        OnboardingStep::Professional => &[
            "I have MBBS from AIIMS and MD in Cardiology",
            "My registration number is ABC123456",
            "I have 10 years of experience",
            "I completed my MBBS in 2010",
        ],
        OnboardingStep::Clinic => &[
            "My clinic is called City Medical Center",
            "I practice at 123 Main Street, Mumbai",
            "My clinic is in Bandra, Mumbai",
            "I work from 9 AM to 6 PM",
        ],
        OnboardingStep::Documents => &[
            "I have uploaded my documents",
            "My profile is complete",
            "I'm ready to start seeing patients",
        ],
    }
}
