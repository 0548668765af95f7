use crate::error::{FolioError, Result};
use crate::model::{AuthorWithPosts, RecordId};
use crate::query::AuthorKey;
use crate::store::DataStore;

/// The `author(id, email)` arguments. At most one selector is used: id wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorSelector {
    pub id: Option<RecordId>,
    pub email: Option<String>,
}

impl AuthorSelector {
    /// Build a selector from raw arguments. The id arrives as an opaque string
    /// and must be an integer. Blank arguments count as absent.
    pub fn parse(id: Option<&str>, email: Option<&str>) -> Result<Self> {
        let id = given(id)
            .map(|raw| {
                raw.parse::<RecordId>().map_err(|_| {
                    FolioError::InvalidInput(format!("author id must be an integer, got '{}'", raw))
                })
            })
            .transpose()?;
        Ok(Self {
            id,
            email: given(email).map(str::to_string),
        })
    }

    pub fn key(&self) -> Option<AuthorKey> {
        match (&self.id, &self.email) {
            (Some(id), _) => Some(AuthorKey::Id(*id)),
            (None, Some(email)) => Some(AuthorKey::Email(email.clone())),
            (None, None) => None,
        }
    }
}

fn given(arg: Option<&str>) -> Option<&str> {
    arg.map(str::trim).filter(|value| !value.is_empty())
}

pub fn run<S: DataStore + ?Sized>(
    store: &S,
    selector: &AuthorSelector,
) -> Result<Option<AuthorWithPosts>> {
    match selector.key() {
        Some(key) => store.find_author(&key),
        None => Ok(None),
    }
}
