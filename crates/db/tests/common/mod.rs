//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tireshop_db::models::car::{Car, SaveCar};
use tireshop_db::models::client::{Client, SaveClient};
use tireshop_db::models::completed_work::{CompletedWork, SaveCompletedWork};
use tireshop_db::models::master::{Master, SaveMaster};
use tireshop_db::models::order::{Order, SaveOrder};
use tireshop_db::models::service::{SaveService, Service};
use tireshop_db::models::tire::{SaveTire, Tire};
use tireshop_db::repositories::{
    CarRepo, ClientRepo, CompletedWorkRepo, MasterRepo, OrderRepo, ServiceRepo, TireRepo,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_client(name: &str) -> SaveClient {
    SaveClient {
        full_name: name.to_string(),
        phone: "+7 912 345-67-89".to_string(),
    }
}

pub fn new_car(client_id: i64) -> SaveCar {
    SaveCar {
        client_id,
        brand: "Lada".to_string(),
        model: "Vesta".to_string(),
        manufacture_year: 2019,
        license_plate: "А123ВС77".to_string(),
        vin: "XTA21129012345678".to_string(),
    }
}

pub fn new_tire(car_id: i64) -> SaveTire {
    SaveTire {
        car_id,
        tire_type: "Radial".to_string(),
        seasonality: "Winter".to_string(),
        manufacturer: "Nokian".to_string(),
        tire_model: "Hakkapeliitta 10".to_string(),
        size: "205/55 R16".to_string(),
        load_index: 94,
        wear_percentage: 35,
        pressure: 2.2,
    }
}

pub fn new_master(name: &str) -> SaveMaster {
    SaveMaster {
        full_name: name.to_string(),
        position: "Tire fitter".to_string(),
        rank: 4,
        hourly_rate: Decimal::new(150_000, 2),
    }
}

pub fn new_service(name: &str) -> SaveService {
    SaveService {
        service_name: name.to_string(),
        service_cost: Decimal::new(80_000, 2),
    }
}

pub fn new_order(car_id: i64, master_id: Option<i64>, order_date: NaiveDate) -> SaveOrder {
    SaveOrder {
        order_date,
        car_id,
        master_id,
        payment_date: None,
    }
}

pub fn new_work(order_number: i64, service_code: i64, master_id: i64) -> SaveCompletedWork {
    SaveCompletedWork {
        order_number,
        service_code,
        master_id,
        wheel_count: 4,
        completion_time_min: 60,
        work_total: Decimal::new(120_000, 2),
    }
}

/// A client with one car, one tire, one master, one service, one order
/// assigned to that master and one completed work on it.
pub struct Fixture {
    pub client: Client,
    pub car: Car,
    pub tire: Tire,
    pub master: Master,
    pub service: Service,
    pub order: Order,
    pub work: CompletedWork,
}

pub async fn seed(pool: &PgPool) -> Fixture {
    let client = ClientRepo::create(pool, &new_client("Ivan Petrov")).await.unwrap();
    let car = CarRepo::create(pool, &new_car(client.client_id)).await.unwrap();
    let tire = TireRepo::create(pool, &new_tire(car.car_id)).await.unwrap();
    let master = MasterRepo::create(pool, &new_master("Sergei Ivanov")).await.unwrap();
    let service = ServiceRepo::create(pool, &new_service("Wheel balancing")).await.unwrap();
    let order = OrderRepo::create(
        pool,
        &new_order(car.car_id, Some(master.master_id), date(2026, 3, 10)),
    )
    .await
    .unwrap();
    let work = CompletedWorkRepo::create(
        pool,
        &new_work(order.order_number, service.service_code, master.master_id),
    )
    .await
    .unwrap();

    Fixture {
        client,
        car,
        tire,
        master,
        service,
        order,
        work,
    }
}
