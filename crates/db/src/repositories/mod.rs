//! Repository layer.
//!
//! Plain CRUD comes from the generic [`CrudRepo`]; the aliases below name it
//! per entity. Entity-specific queries are inherent impls on `CrudRepo<E>`
//! in the submodules. Every method accepts `&PgPool` as the first argument.

pub mod car_repo;
pub mod completed_work_repo;
pub mod dashboard_repo;
pub mod order_repo;
pub mod tire_repo;

pub use crate::crud::{CrudRepo, UpdateOutcome};
pub use dashboard_repo::DashboardRepo;

use crate::models::car::Car;
use crate::models::client::Client;
use crate::models::completed_work::CompletedWork;
use crate::models::master::Master;
use crate::models::order::Order;
use crate::models::service::Service;
use crate::models::tire::Tire;

pub type ClientRepo = CrudRepo<Client>;
pub type CarRepo = CrudRepo<Car>;
pub type TireRepo = CrudRepo<Tire>;
pub type MasterRepo = CrudRepo<Master>;
pub type ServiceRepo = CrudRepo<Service>;
pub type OrderRepo = CrudRepo<Order>;
pub type CompletedWorkRepo = CrudRepo<CompletedWork>;
