//! Medical appointment use-cases.
//!
//! # Responsibility
//! - Derive date, time and sort timestamp from one caller-provided moment.
//! - Keep the agenda sorted ascending by timestamp across schedules and
//!   reschedules.

use crate::model::entries::Appointment;
use crate::model::record::non_empty;
use crate::repo::collection::Collection;
use crate::service::confirm::Confirmation;
use crate::service::{clock_time, short_date, ServiceResult};
use crate::store::KvStore;
use chrono::{DateTime, Local};

pub struct AgendaService<S: KvStore, C: Confirmation> {
    appointments: Collection<Appointment, S>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> AgendaService<S, C> {
    pub fn new(appointments: Collection<Appointment, S>, confirm: C) -> Self {
        Self { appointments, confirm }
    }

    /// Schedules an appointment at `when`; the agenda stays sorted.
    pub fn schedule(
        &self,
        doctor: &str,
        description: &str,
        when: DateTime<Local>,
    ) -> ServiceResult<Appointment> {
        let doctor = non_empty("doctor", doctor)?;
        let description = non_empty("description", description)?;

        let appointment = Appointment::new(
            doctor,
            description,
            short_date(&when),
            clock_time(&when),
            when.timestamp_millis(),
        );
        self.appointments.insert(appointment.clone())?;
        Ok(appointment)
    }

    /// Rewrites an appointment in place, re-deriving date, time and
    /// timestamp; the agenda is re-sorted. Returns `false` when the id is
    /// unknown.
    pub fn reschedule(
        &self,
        id: &str,
        doctor: &str,
        description: &str,
        when: DateTime<Local>,
    ) -> ServiceResult<bool> {
        let doctor = non_empty("doctor", doctor)?;
        let description = non_empty("description", description)?;

        Ok(self.appointments.update_by_id(id, |appointment| {
            appointment.doctor = doctor;
            appointment.description = description;
            appointment.date = short_date(&when);
            appointment.time = clock_time(&when);
            appointment.timestamp = when.timestamp_millis();
        })?)
    }

    /// Agenda sorted ascending by timestamp.
    pub fn list(&self) -> Vec<Appointment> {
        self.appointments.load()
    }

    /// Deletes one appointment after confirmation.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Delete appointment", "Do you want to delete this appointment?")
        {
            return Ok(false);
        }
        Ok(self.appointments.delete_by_id(id)?)
    }

    /// Empties the whole agenda after confirmation.
    pub fn clear(&self) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Empty agenda", "Do you want to delete every appointment?")
        {
            return Ok(false);
        }
        self.appointments.clear()?;
        Ok(true)
    }
}
