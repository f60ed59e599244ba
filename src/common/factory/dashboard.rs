use chrono::Utc;
use entities::dashboard;
use sea_orm::Set;
use uuid::Uuid;

pub fn dashboard(user_id: Uuid) -> dashboard::ActiveModel {
    let id = Uuid::now_v7();
    let now = Utc::now();
    dashboard::ActiveModel {
        id: Set(id),
        user_id: Set(user_id),
        title: Set(format!("dashboard-{}", id)),
        is_public: Set(false),
        position: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait DashboardFactory {
    fn title(self, title: &str) -> dashboard::ActiveModel;
    fn is_public(self, is_public: bool) -> dashboard::ActiveModel;
    fn position(self, position: i32) -> dashboard::ActiveModel;
}

impl DashboardFactory for dashboard::ActiveModel {
    fn title(mut self, title: &str) -> dashboard::ActiveModel {
        self.title = Set(title.to_string());
        self
    }

    fn is_public(mut self, is_public: bool) -> dashboard::ActiveModel {
        self.is_public = Set(is_public);
        self
    }

    fn position(mut self, position: i32) -> dashboard::ActiveModel {
        self.position = Set(position);
        self
    }
}
