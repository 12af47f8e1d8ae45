use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::Role;

pub struct RegisterUserBuilder {
    inner: RegisterUser,
}

impl Default for RegisterUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterUserBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterUser {
                user_id: "u-1".to_string(),
                username: "alice".to_string(),
                email: "alice@example.org".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Liddell".to_string(),
                role: Role::Worker,
                department: "Engineering".to_string(),
                registered_at: 1_736_150_400_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn role(mut self, v: Role) -> Self {
        self.inner.role = v;
        self
    }

    pub fn build(self) -> RegisterUser {
        self.inner
    }
}
