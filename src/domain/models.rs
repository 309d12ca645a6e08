use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned identifier of a [`Student`].
pub type StudentId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: StudentId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub sex: String,
}

impl Student {
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        Self {
            id,
            firstname: new.firstname,
            lastname: new.lastname,
            email: new.email,
            sex: new.sex,
        }
    }

    /// Column values in table order, as the raw diagnostics page shows them.
    pub fn as_row(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.firstname.clone(),
            self.lastname.clone(),
            self.email.clone(),
            self.sex.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub sex: String,
}

impl NewStudent {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        sex: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            sex: sex.into(),
        }
    }
}

/// Column order of the `student` table.
pub const STUDENT_COLUMNS: [&str; 5] = ["id", "firstname", "lastname", "email", "sex"];
