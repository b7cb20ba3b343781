pub mod locks;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        reservation::ReservationRepository, user::UserRepository, vehicle::VehicleRepository,
    },
    error::reservation::ReservationError,
    model::{
        interval::Interval,
        reservation::{CreateReservationParams, Reservation},
        user::Role,
        vehicle::Vehicle,
    },
    service::reservation::locks::VehicleLockRegistry,
};

/// Booking service for the fleet.
///
/// Owns the availability semantics: intervals are inclusive on both ends, two
/// reservations for the same vehicle may never overlap, and a commit
/// re-validates availability inside a transaction while holding the vehicle's
/// lock so concurrent requests cannot both succeed.
#[derive(Clone)]
pub struct ReservationService {
    db: DatabaseConnection,
    locks: VehicleLockRegistry,
}

impl ReservationService {
    pub fn new(db: DatabaseConnection, locks: VehicleLockRegistry) -> Self {
        Self { db, locks }
    }

    fn validate_interval(interval: Interval) -> Result<(), ReservationError> {
        if !interval.is_valid() {
            return Err(ReservationError::Validation(
                "start_time must not be after end_time".to_string(),
            ));
        }
        Ok(())
    }

    async fn require_vehicle(&self, vehicle_id: i32) -> Result<(), ReservationError> {
        let vehicle_repo = VehicleRepository::new(&self.db);
        if vehicle_repo.find_by_id(vehicle_id).await?.is_none() {
            return Err(ReservationError::NotFound(format!(
                "Vehicle with id {} not found",
                vehicle_id
            )));
        }
        Ok(())
    }

    /// Whether the vehicle is free for the whole interval.
    ///
    /// A read-only check: the answer may be stale by the time a booking is
    /// attempted, which is why `create` re-checks under the vehicle lock.
    pub async fn check_availability(
        &self,
        vehicle_id: i32,
        interval: Interval,
    ) -> Result<bool, ReservationError> {
        Self::validate_interval(interval)?;
        self.require_vehicle(vehicle_id).await?;

        let reservation_repo = ReservationRepository::new(&self.db);
        let occupied = reservation_repo
            .overlapping_exists(vehicle_id, interval)
            .await?;

        Ok(!occupied)
    }

    /// All vehicles free for the whole interval, resolved with a single
    /// anti-join over the reservation table.
    pub async fn list_available_vehicles(
        &self,
        interval: Interval,
    ) -> Result<Vec<Vehicle>, ReservationError> {
        Self::validate_interval(interval)?;

        let vehicle_repo = VehicleRepository::new(&self.db);
        let vehicles = vehicle_repo.find_available(interval).await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Books a vehicle for the requested period.
    ///
    /// The availability check and the insert run inside one transaction while
    /// holding the per-vehicle lock, so of two concurrent requests for
    /// overlapping periods exactly one succeeds and the other observes the
    /// committed row and fails with `Conflict`.
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<Reservation, ReservationError> {
        let interval = params.interval();
        Self::validate_interval(interval)?;
        self.require_vehicle(params.vehicle_id).await?;

        let user_repo = UserRepository::new(&self.db);
        if user_repo.find_by_id(params.user_id).await?.is_none() {
            return Err(ReservationError::NotFound(format!(
                "User with id {} not found",
                params.user_id
            )));
        }

        let _commit_guard = self.locks.acquire(params.vehicle_id).await;

        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        if reservation_repo
            .overlapping_exists(params.vehicle_id, interval)
            .await?
        {
            txn.rollback().await?;
            return Err(ReservationError::Conflict);
        }

        let reservation = reservation_repo.insert(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for vehicle {} from {} to {}",
            reservation.id,
            reservation.vehicle_id,
            reservation.start_time,
            reservation.end_time
        );

        Ok(Reservation::from_entity(reservation))
    }

    /// Cancels a reservation by deleting its row.
    ///
    /// Only the owner or an administrator may cancel, and only while the
    /// reservation has not yet started. At the start instant itself the
    /// reservation counts as started.
    pub async fn cancel(
        &self,
        reservation_id: i32,
        actor: &entity::user::Model,
    ) -> Result<(), ReservationError> {
        let reservation_repo = ReservationRepository::new(&self.db);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Err(ReservationError::NotFound(format!(
                "Reservation with id {} not found",
                reservation_id
            )));
        };

        if reservation.user_id != actor.id && !Role::from_db(&actor.role).is_admin() {
            return Err(ReservationError::Forbidden);
        }

        if Utc::now() >= reservation.start_time {
            return Err(ReservationError::TooLate);
        }

        reservation_repo.delete(reservation_id).await?;

        tracing::info!(
            "Cancelled reservation {} for vehicle {}",
            reservation_id,
            reservation.vehicle_id
        );

        Ok(())
    }

    /// Fetches a single reservation, visible to its owner and administrators.
    pub async fn get_by_id(
        &self,
        reservation_id: i32,
        actor: &entity::user::Model,
    ) -> Result<Reservation, ReservationError> {
        let reservation_repo = ReservationRepository::new(&self.db);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Err(ReservationError::NotFound(format!(
                "Reservation with id {} not found",
                reservation_id
            )));
        };

        if reservation.user_id != actor.id && !Role::from_db(&actor.role).is_admin() {
            return Err(ReservationError::Forbidden);
        }

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Reservation>, ReservationError> {
        let reservation_repo = ReservationRepository::new(&self.db);
        let reservations = reservation_repo.find_by_user(user_id).await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Reservations of the user currently in progress, i.e. whose interval
    /// contains the present instant.
    pub async fn list_active_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<Reservation>, ReservationError> {
        let reservation_repo = ReservationRepository::new(&self.db);
        let reservations = reservation_repo
            .find_active_by_user(user_id, Utc::now())
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    pub async fn list_all(&self) -> Result<Vec<Reservation>, ReservationError> {
        let reservation_repo = ReservationRepository::new(&self.db);
        let reservations = reservation_repo.find_all().await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }
}
