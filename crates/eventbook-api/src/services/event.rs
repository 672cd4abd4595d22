// Event service for business logic
//
// The approval filter lives here, once. Public callers go through the
// approved_* methods; the underlying queries already carry the status
// constraint, so handlers never re-filter.

use std::sync::Arc;

use eventbook_core::{Event, EventStatus, Result};
use eventbook_storage::{CreateEvent, Database, EventRow, UpdateEvent};
use uuid::Uuid;

use crate::vendor::{CreateEventRequest, UpdateEventRequest};

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // ----- public surface (approved only) -----

    /// Newest-first listing of approved events; the only listing exposed to
    /// unauthenticated callers.
    pub async fn approved_events(&self) -> Result<Vec<Event>> {
        let rows = self
            .db
            .list_events_by_status(&EventStatus::Approved.to_string())
            .await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    /// None when the event is missing OR not approved; callers cannot tell
    /// the difference, by the same rule that hides pending events from lists.
    pub async fn approved_event(&self, id: Uuid) -> Result<Option<Event>> {
        let event = self.db.get_event(id).await?.map(Self::row_to_event);
        Ok(event.filter(Event::is_public))
    }

    pub async fn search_approved(&self, query: &str) -> Result<Vec<Event>> {
        let rows = self
            .db
            .search_events(query, Some(&EventStatus::Approved.to_string()))
            .await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn approved_by_location(&self, location: &str) -> Result<Vec<Event>> {
        let rows = self
            .db
            .list_events_by_location(location, Some(&EventStatus::Approved.to_string()))
            .await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    // ----- authenticated surface -----

    /// Vendor's own events, every status: pending work stays visible to its owner
    pub async fn events_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Event>> {
        let rows = self.db.list_events_by_vendor(vendor_id).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn events_by_status(&self, status: EventStatus) -> Result<Vec<Event>> {
        let rows = self.db.list_events_by_status(&status.to_string()).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        let row = self.db.get_event(id).await?;
        Ok(row.map(Self::row_to_event))
    }

    /// New events always start PENDING, waiting for an admin decision
    pub async fn create(&self, vendor_id: Uuid, req: CreateEventRequest) -> Result<Event> {
        let input = CreateEvent {
            title: req.title,
            description: req.description,
            vendor_id,
            category: req.category,
            location: req.location,
            venue: req.venue,
            event_date: req.event_date,
            start_time: req.start_time,
            end_time: req.end_time,
            ticket_price: req.ticket_price,
            max_attendees: req.max_attendees,
            image_url: req.image_url,
        };
        let row = self.db.create_event(input).await?;
        Ok(Self::row_to_event(row))
    }

    /// Partial update; created_at is untouched, updated_at advances.
    /// Status is deliberately absent from UpdateEventRequest - vendors
    /// cannot approve their own listings.
    pub async fn update(&self, id: Uuid, req: UpdateEventRequest) -> Result<Option<Event>> {
        let input = UpdateEvent {
            title: req.title,
            description: req.description,
            category: req.category,
            location: req.location,
            venue: req.venue,
            event_date: req.event_date,
            start_time: req.start_time,
            end_time: req.end_time,
            ticket_price: req.ticket_price,
            max_attendees: req.max_attendees,
            image_url: req.image_url,
            status: None,
        };
        let row = self.db.update_event(id, input).await?;
        Ok(row.map(Self::row_to_event))
    }

    /// Administrative status transition (approve, reject, cancel, complete)
    pub async fn set_status(&self, id: Uuid, status: EventStatus) -> Result<Option<Event>> {
        let input = UpdateEvent {
            status: Some(status.to_string()),
            ..UpdateEvent::default()
        };
        let row = self.db.update_event(id, input).await?;
        Ok(row.map(Self::row_to_event))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.db.delete_event(id).await?)
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            vendor_id: row.vendor_id,
            category: row.category,
            location: row.location,
            venue: row.venue,
            event_date: row.event_date,
            start_time: row.start_time,
            end_time: row.end_time,
            ticket_price: row.ticket_price,
            max_attendees: row.max_attendees,
            current_attendees: row.current_attendees,
            image_url: row.image_url,
            // An unreadable status stays out of public view
            status: EventStatus::parse(&row.status).unwrap_or(EventStatus::Pending),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
