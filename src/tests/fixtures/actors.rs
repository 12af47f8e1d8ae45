use crate::shared::core::actor::{Actor, Role};

pub fn admin() -> Actor {
    Actor::new("user-admin-0001", "testadmin", Role::Admin)
}

pub fn manager() -> Actor {
    Actor::new("user-manager-0001", "testmanager", Role::Manager)
}

pub fn worker() -> Actor {
    Actor::new("user-worker-0001", "testworker", Role::Worker)
}

pub fn other_worker() -> Actor {
    Actor::new("user-worker-0002", "otherworker", Role::Worker)
}
