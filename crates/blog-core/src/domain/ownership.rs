//! Ownership rules governing who may mutate which resource.
//!
//! Ownership is by stored author id, never by session: a principal owns an
//! entity exactly when the entity's author id equals the principal's id.
//! Comment deletion carries one deliberate exception - the article's author
//! may moderate any comment under their article.

use uuid::Uuid;

use crate::error::DomainError;

/// Require that `principal` is the stored author of the entity.
pub fn ensure_owner(author_id: Uuid, principal: Uuid) -> Result<(), DomainError> {
    if author_id == principal {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

/// Comment deletion: allowed for the comment's author or the author of the
/// article the comment belongs to.
pub fn can_delete_comment(comment_author: Uuid, article_author: Uuid, principal: Uuid) -> bool {
    principal == comment_author || principal == article_author
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_mutate() {
        let id = Uuid::new_v4();
        assert!(ensure_owner(id, id).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let result = ensure_owner(Uuid::new_v4(), Uuid::new_v4());
        assert!(matches!(result, Err(DomainError::Forbidden)));
    }

    #[test]
    fn comment_author_may_delete() {
        let author = Uuid::new_v4();
        assert!(can_delete_comment(author, Uuid::new_v4(), author));
    }

    #[test]
    fn article_author_may_moderate() {
        let article_author = Uuid::new_v4();
        assert!(can_delete_comment(
            Uuid::new_v4(),
            article_author,
            article_author
        ));
    }

    #[test]
    fn third_party_may_not_delete() {
        assert!(!can_delete_comment(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        ));
    }
}
