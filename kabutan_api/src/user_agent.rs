/// Mobile Chrome on Android. The quote site serves its lighter markup to
/// this agent.
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; Mobile) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Mobile Safari/537.36";

pub fn get_user_agent() -> &'static str {
    MOBILE_USER_AGENT
}
