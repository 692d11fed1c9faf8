use super::db::Db;
use crate::libs::error::HallPassError;
use crate::libs::student::Student;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_STUDENT: &str = "INSERT INTO students (first_name, last_name, period, notes) VALUES (?1, ?2, ?3, ?4)";
const SELECT_STUDENTS: &str = "SELECT id, first_name, last_name, period, notes, created_at FROM students";
const ORDER_BY_NAME: &str = "ORDER BY first_name COLLATE NOCASE, last_name COLLATE NOCASE";
const WHERE_ID: &str = "WHERE id = ?1";
const UPDATE_STUDENT: &str = "UPDATE students SET first_name = ?1, last_name = ?2, period = ?3, notes = ?4 WHERE id = ?5";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";
const DELETE_ALL_STUDENTS: &str = "DELETE FROM students";

pub struct Students {
    pub conn: Connection,
}

impl Students {
    pub fn new() -> Result<Students> {
        let db = Db::new()?;

        Ok(Students { conn: db.conn })
    }

    /// Stores a new cadet and returns its id.
    pub fn insert(&mut self, student: &Student) -> Result<i64> {
        self.conn
            .execute(INSERT_STUDENT, params![student.first_name, student.last_name, student.period, student.notes])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// All cadets, alphabetically by first then last name.
    pub fn fetch(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_STUDENTS, ORDER_BY_NAME))?;
        let student_iter = stmt.query_map([], Self::map_row)?;

        let mut students = Vec::new();
        for student_result in student_iter {
            students.push(student_result?);
        }

        Ok(students)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(&format!("{} {}", SELECT_STUDENTS, WHERE_ID), params![id], Self::map_row)
            .optional()?;

        Ok(student)
    }

    pub fn update(&mut self, student: &Student) -> Result<()> {
        let id = student.id.ok_or_else(|| HallPassError::InvalidInput("cadet has no id".to_string()))?;
        let changed = self
            .conn
            .execute(UPDATE_STUDENT, params![student.first_name, student.last_name, student.period, student.notes, id])?;

        if changed == 0 {
            return Err(HallPassError::StudentNotFound(id).into());
        }
        Ok(())
    }

    /// Removes a cadet; their space walks go with them.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let changed = self.conn.execute(DELETE_STUDENT, params![id])?;

        if changed == 0 {
            return Err(HallPassError::StudentNotFound(id).into());
        }
        tracing::info!(student = id, "cadet deleted");
        Ok(())
    }

    /// Empties the roster and returns the number of cadets removed.
    pub fn delete_all(&mut self) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_ALL_STUDENTS, [])?;
        tracing::info!(deleted, "roster cleared");

        Ok(deleted)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            period: row.get(3)?,
            notes: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}
