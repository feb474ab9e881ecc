use crate::macros::id;

id!(UserId);
