//! Identifier helpers shared by hosts and the catalog.

/// Namespace of vanilla identifiers.
pub const NAMESPACE: &str = "minecraft";

/// Drops a leading `minecraft:` namespace. Other namespaces are kept.
#[inline]
pub fn strip_namespace(id: &str) -> &str {
    id.strip_prefix(NAMESPACE)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Qualifies a bare identifier with `minecraft:`; namespaced input is returned as is.
pub fn namespaced(id: &str) -> String {
    if id.contains(':') {
        id.to_string()
    } else {
        format!("{NAMESPACE}:{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_vanilla_namespace() {
        assert_eq!(strip_namespace("minecraft:stone"), "stone");
        assert_eq!(strip_namespace("stone"), "stone");
        assert_eq!(strip_namespace("custom:stone"), "custom:stone");
        assert_eq!(strip_namespace("minecraft"), "minecraft");
        assert_eq!(strip_namespace("minecraftstone"), "minecraftstone");
    }

    #[test]
    fn namespaced_is_idempotent() {
        assert_eq!(namespaced("stone"), "minecraft:stone");
        assert_eq!(namespaced("minecraft:stone"), "minecraft:stone");
        assert_eq!(namespaced("custom:thing"), "custom:thing");
    }
}
