use std::sync::LazyLock;

use archive_auth_contracts::Authentication;

use crate::UUID1;

pub static FOO: LazyLock<Authentication> = LazyLock::new(|| Authentication {
    user_id: UUID1.into(),
    email: "foo@example.org".parse().unwrap(),
});
