#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::reservations::*;
    use crate::test_support::{
        customer, unit, MockCustomerRepository, MockReservationRepository, MockUnitRepository,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct Fixture {
        reservations: MockReservationRepository,
        service: ReservationService,
    }

    fn fixture(units: Vec<crate::units::Unit>, existing: Vec<Reservation>) -> Fixture {
        let reservations = MockReservationRepository::with(existing);
        let service = ReservationService::new(
            Arc::new(reservations.clone()),
            Arc::new(MockCustomerRepository::with(vec![
                customer(1, "Ana"),
                customer(2, "Luis"),
            ])),
            Arc::new(MockUnitRepository::with(units)),
        );
        Fixture {
            reservations,
            service,
        }
    }

    fn candidate(start: &str, end: &str) -> NewReservation {
        NewReservation {
            id: None,
            customer_id: 1,
            unit_id: 5,
            start_date: start.to_string(),
            end_date: end.to_string(),
            total_paid: None,
            status: ReservationStatus::Pending,
        }
    }

    fn stored(id: i64, unit_id: i64) -> Reservation {
        Reservation {
            id,
            customer_id: 2,
            unit_id,
            start_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
            total_paid: 200_000,
            status: ReservationStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn test_create_on_empty_collection() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![]);

        let created = f
            .service
            .create_reservation(candidate("2025-01-10", "2025-01-13"))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.duration_nights(), 3);
        assert_eq!(created.total_paid, 300_000);
        assert_eq!(f.reservations.reservations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_id() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![stored(3, 5), stored(7, 5)]);
        let mut c = candidate("2025-01-10", "2025-01-11");
        c.id = Some(3);

        let created = f.service.create_reservation(c).await.unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(f.service.get_reservations().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejected_leaves_collection_unchanged() {
        let f = fixture(vec![unit(5, 100_000, false)], vec![stored(1, 5)]);

        let err = f
            .service
            .create_reservation(candidate("2025-01-10", "2025-01-13"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Reservation(ReservationError::UnitUnavailable(5))
        ));
        assert_eq!(f.service.get_reservations().unwrap(), vec![stored(1, 5)]);
    }

    #[tokio::test]
    async fn test_update_against_unavailable_unit_is_accepted() {
        let f = fixture(vec![unit(5, 100_000, false)], vec![stored(1, 5)]);
        let mut c = candidate("2024-08-01", "2024-08-05");
        c.id = Some(1);

        let updated = f.service.update_reservation(c).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.customer_id, 1);
        assert_eq!(updated.total_paid, 400_000);
        assert_eq!(f.service.get_reservations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![]);
        let err = f
            .service
            .update_reservation(candidate("2024-08-01", "2024-08-05"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn test_update_of_missing_reservation_is_not_found() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![stored(1, 5)]);
        let mut c = candidate("2024-08-01", "2024-08-05");
        c.id = Some(9);

        let err = f.service.update_reservation(c).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(f.service.get_reservations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_status_transitions_are_permissive() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![stored(1, 5)]);

        let cancelled = f
            .service
            .update_reservation_status(1, ReservationStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);

        // cancelled -> confirmed is allowed as well
        let confirmed = f
            .service
            .update_reservation_status(1, ReservationStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
        assert_eq!(confirmed.total_paid, 200_000);
    }

    #[tokio::test]
    async fn test_delete_reservation() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![stored(1, 5), stored(2, 6)]);
        assert_eq!(f.service.delete_reservation(1).await.unwrap(), 1);
        assert_eq!(f.service.delete_reservation(1).await.unwrap(), 0);
        assert_eq!(f.service.get_reservations().unwrap(), vec![stored(2, 6)]);
    }

    #[test]
    fn test_details_and_listings() {
        let f = fixture(
            vec![unit(5, 100_000, true)],
            vec![stored(1, 5), stored(2, 6)],
        );

        let details = f
            .service
            .get_reservation_details(&ReservationFilter::default())
            .unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].customer.name, "Luis");

        assert_eq!(f.service.get_unit_reservations(6).unwrap().len(), 1);
        assert_eq!(f.service.get_customer_reservations(2).unwrap().len(), 2);
        assert!(f.service.get_customer_reservations(1).unwrap().is_empty());
    }

    #[test]
    fn test_quote_stay_unknown_unit() {
        let f = fixture(vec![unit(5, 100_000, true)], vec![]);
        assert!(f
            .service
            .quote_stay(8, "2024-08-01", "2024-08-02")
            .unwrap_err()
            .is_not_found());
        assert_eq!(
            f.service
                .quote_stay(5, "2024-08-01", "2024-08-02")
                .unwrap()
                .estimated_total,
            100_000
        );
    }
}
