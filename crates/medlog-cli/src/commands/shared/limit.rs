/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(
    local: Option<u32>,
    global: Option<u32>,
    fallback: Option<u32>,
) -> Option<u32> {
    local.or(global).or(fallback)
}
