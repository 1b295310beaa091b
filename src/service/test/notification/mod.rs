use crate::{
    error::AppError,
    model::{
        notification::{BroadcastNotificationParams, CreateNotificationParams},
        order::{OrderStatus, OrderStatusChanged},
    },
    service::notification::NotificationService,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod broadcast;
mod create;
