use super::db::Db;
use crate::libs::duration::Instant;
use crate::libs::error::HallPassError;
use crate::libs::pass::{check_interval, Pass, PassRecord};
use anyhow::Result;
use chrono::SecondsFormat;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

const INSERT_PASS: &str = "INSERT INTO passes (student_id, start_at, end_at, is_personal, reason) VALUES (?1, ?2, NULL, ?3, ?4)";
const SELECT_PASSES: &str = "SELECT id, student_id, start_at, end_at, is_personal, reason FROM passes";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_STUDENT: &str = "WHERE student_id = ?1";
const WHERE_OPEN: &str = "WHERE end_at IS NULL";
const WHERE_STUDENT_OPEN: &str = "WHERE student_id = ?1 AND end_at IS NULL";
const ORDER_BY_START: &str = "ORDER BY start_at DESC, id DESC";
const SELECT_STUDENT_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1)";
const SELECT_OTHER_OPEN: &str = "SELECT EXISTS(SELECT 1 FROM passes WHERE student_id = ?1 AND end_at IS NULL AND id != ?2)";
const CLOSE_PASS: &str = "UPDATE passes SET end_at = ?1 WHERE id = ?2";
const UPDATE_PASS: &str = "UPDATE passes SET start_at = ?1, end_at = ?2, is_personal = ?3, reason = ?4 WHERE id = ?5";
const DELETE_PASS: &str = "DELETE FROM passes WHERE id = ?1";

/// RFC 3339 in UTC with whole seconds, e.g. `2022-01-01T08:30:00Z`.
pub fn to_storage(instant: Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub struct Passes {
    pub conn: Connection,
}

impl Passes {
    pub fn new() -> Result<Passes> {
        let db = Db::new()?;

        Ok(Passes { conn: db.conn })
    }

    /// Sends a cadet out on a space walk starting at `now`.
    pub fn open(&mut self, student_id: i64, is_personal: bool, reason: &str, now: Instant) -> Result<Pass> {
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(SELECT_STUDENT_EXISTS, params![student_id], |row| row.get(0))?;
        if !exists {
            return Err(HallPassError::StudentNotFound(student_id).into());
        }

        let open: bool = tx.query_row(SELECT_OTHER_OPEN, params![student_id, -1], |row| row.get(0))?;
        if open {
            return Err(HallPassError::PassAlreadyOpen(student_id).into());
        }

        tx.execute(INSERT_PASS, params![student_id, to_storage(now), is_personal, reason.trim()])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::info!(pass = id, student = student_id, is_personal, "space walk started");
        self.get_by_id(id)?.ok_or_else(|| HallPassError::PassNotFound(id).into())
    }

    /// Returns a cadet from their open space walk at `now`.
    pub fn close(&mut self, student_id: i64, now: Instant) -> Result<Pass> {
        let mut pass = self.fetch_open_for_student(student_id)?.ok_or(HallPassError::NoOpenPass(student_id))?;
        check_interval(pass.start_at, now)?;

        self.conn.execute(CLOSE_PASS, params![to_storage(now), pass.id])?;
        pass.end_at = Some(now);

        tracing::info!(pass = pass.id, student = student_id, "space walk ended");
        Ok(pass)
    }

    /// Overwrites the editable fields of a walk.
    pub fn update(&mut self, pass: &Pass) -> Result<()> {
        if let Some(end_at) = pass.end_at {
            check_interval(pass.start_at, end_at)?;
        } else {
            let other_open: bool = self.conn.query_row(SELECT_OTHER_OPEN, params![pass.student_id, pass.id], |row| row.get(0))?;
            if other_open {
                return Err(HallPassError::PassAlreadyOpen(pass.student_id).into());
            }
        }

        let changed = self.conn.execute(
            UPDATE_PASS,
            params![to_storage(pass.start_at), pass.end_at.map(to_storage), pass.is_personal, pass.reason, pass.id],
        )?;

        if changed == 0 {
            return Err(HallPassError::PassNotFound(pass.id).into());
        }
        tracing::debug!(pass = pass.id, "space walk updated");
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let changed = self.conn.execute(DELETE_PASS, params![id])?;

        if changed == 0 {
            return Err(HallPassError::PassNotFound(id).into());
        }
        tracing::info!(pass = id, "space walk deleted");
        Ok(())
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Pass>> {
        let record = self
            .conn
            .query_row(&format!("{} {}", SELECT_PASSES, WHERE_ID), params![id], Self::map_row)
            .optional()?;

        Ok(record.map(Pass::try_from).transpose()?)
    }

    /// A cadet's walks, most recent first.
    pub fn fetch_for_student(&mut self, student_id: i64) -> Result<Vec<Pass>> {
        self.query(&format!("{} {} {}", SELECT_PASSES, WHERE_STUDENT, ORDER_BY_START), params![student_id])
    }

    /// Every walk still in progress.
    pub fn fetch_open(&mut self) -> Result<Vec<Pass>> {
        self.query(&format!("{} {} {}", SELECT_PASSES, WHERE_OPEN, ORDER_BY_START), [])
    }

    pub fn fetch_open_for_student(&mut self, student_id: i64) -> Result<Option<Pass>> {
        let record = self
            .conn
            .query_row(&format!("{} {}", SELECT_PASSES, WHERE_STUDENT_OPEN), params![student_id], Self::map_row)
            .optional()?;

        Ok(record.map(Pass::try_from).transpose()?)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Pass>> {
        self.query(&format!("{} {}", SELECT_PASSES, ORDER_BY_START), [])
    }

    fn query<P: Params>(&mut self, sql: &str, params: P) -> Result<Vec<Pass>> {
        let mut stmt = self.conn.prepare(sql)?;
        let record_iter = stmt.query_map(params, Self::map_row)?;

        let mut passes = Vec::new();
        for record_result in record_iter {
            passes.push(Pass::try_from(record_result?)?);
        }

        Ok(passes)
    }

    fn map_row(row: &Row) -> rusqlite::Result<PassRecord> {
        Ok(PassRecord {
            id: row.get(0)?,
            student_id: row.get(1)?,
            start_at: row.get(2)?,
            end_at: row.get(3)?,
            is_personal: row.get(4)?,
            reason: row.get(5)?,
        })
    }
}
