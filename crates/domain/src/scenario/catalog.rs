//! The standard create-user scenario table.
//!
//! Expected statuses are fixtures of the remote service's behaviour, not
//! derived from any rule implemented here.

use serde_json::Value;

use super::{Scenario, Step};
use crate::request::{FIRST_NAME, Payload};
use crate::response::StatusCode;
use crate::testing::StatusExpectation;

/// Name reported for the standard table.
pub const SUITE_NAME: &str = "User Creation API Tests";

const fn expect(code: StatusCode) -> StatusExpectation {
    StatusExpectation::Exact(code.as_u16())
}

fn user(
    first_name: impl Into<Value>,
    last_name: impl Into<Value>,
    phone_number: impl Into<Value>,
    email_id: impl Into<Value>,
) -> Payload {
    Payload::user(first_name, last_name, phone_number, email_id)
}

/// Returns the thirty standard scenarios, in order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn standard_scenarios() -> Vec<Scenario> {
    let created = expect(StatusCode::CREATED);
    let rejected = expect(StatusCode::BAD_REQUEST);

    vec![
        Scenario::new(
            1,
            "Successfully create a new user",
            user("Test", "User", 9_999_999_999_u64, "test.user@example.com"),
            created.clone(),
        ),
        Scenario::new(
            2,
            "Fail to create user with missing firstName",
            user("", "User", 9_999_999_998_u64, "test.user2@example.com").without(FIRST_NAME),
            rejected.clone(),
        ),
        Scenario::new(
            3,
            "Fail to create user with duplicate phone number",
            user("Test2", "User2", 8_888_888_888_u64, "test.user4@example.com"),
            rejected.clone(),
        )
        .with_setup(user("Test1", "User1", 8_888_888_888_u64, "test.user3@example.com")),
        // Earlier revisions of this case sent a different address on the
        // asserted request, so it never hit the duplicate. Both requests now
        // share duplicate@example.com with distinct phone numbers.
        Scenario::new(
            4,
            "Fail to create user with duplicate email",
            user("whoami", "batman", 3_838_383_838_u64, "duplicate@example.com"),
            rejected.clone(),
        )
        .with_setup(user("Test3", "User3", 7_777_777_777_u64, "duplicate@example.com")),
        Scenario::new(
            5,
            "Fail to create user without roll number",
            Step::new(user("Test", "User", 5_555_555_555_u64, "test.user5@example.com"))
                .credential(""),
            expect(StatusCode::UNAUTHORIZED),
        ),
        Scenario::new(
            6,
            "Validate phone number format",
            user("Test", "User", "123", "test.user6@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            7,
            "Validate email format",
            user("Test", "User", 4_444_444_444_u64, "invalid-email"),
            rejected.clone(),
        ),
        Scenario::new(
            8,
            "Handle very long input strings",
            user(
                "A".repeat(1000),
                "B".repeat(1000),
                3_333_333_333_u64,
                format!("{}@example.com", "c".repeat(900)),
            ),
            rejected.clone(),
        ),
        Scenario::new(
            9,
            "Handle special characters in names",
            user("Test@#$%", "User&*()_+", 2_222_222_222_u64, "special.chars@example.com"),
            created.clone(),
        ),
        Scenario::new(
            10,
            "Handle whitespace in input fields",
            user("  Test  ", "  User  ", 1_111_111_111_u64, "  whitespace@example.com  "),
            created.clone(),
        ),
        Scenario::new(
            11,
            "Check case sensitivity for email addresses",
            user("Test6", "User6", 9_876_543_211_u64, "CASE.SENSITIVE@EXAMPLE.COM"),
            rejected.clone(),
        )
        .with_setup(user("Test5", "User5", 9_876_543_210_u64, "case.sensitive@example.com")),
        Scenario::new(
            12,
            "Test boundary values for phone number",
            user("Boundary", "Test", 10_000_000_000_u64, "boundary@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            13,
            "Handle empty strings for required fields",
            user("", "", 1_234_567_890_u64, "empty@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            14,
            "Handle numeric values in name fields",
            user("123", "456", 9_876_543_212_u64, "numeric.name@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            15,
            "Prevent SQL injection in input fields",
            user(
                "Robert'; DROP TABLE Users; --",
                "User",
                9_876_543_213_u64,
                "sql.injection@example.com",
            ),
            StatusExpectation::not(StatusCode::INTERNAL_SERVER_ERROR),
        ),
        Scenario::new(
            16,
            "Handle international phone numbers",
            user("International", "User", "+442071234567", "international@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            17,
            "Handle Unicode characters in names",
            user("राम", "谢谢", 9_876_543_214_u64, "unicode@example.com"),
            created.clone(),
        ),
        Scenario::new(
            18,
            "Check minimum length requirement for names",
            user("A", "B", 9_876_543_215_u64, "short.name@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            19,
            "Check maximum length for email address",
            user(
                "LongEmail",
                "User",
                9_876_543_216_u64,
                format!("{}@example.com", "a".repeat(256)),
            ),
            rejected.clone(),
        ),
        Scenario::new(
            20,
            "Handle trailing/leading spaces in email",
            user("Space", "Email", 9_876_543_217_u64, " spaceemail@example.com "),
            created.clone(),
        ),
        Scenario::new(
            21,
            "Prevent HTML injection in input fields",
            user(
                r#"<script>alert("XSS")</script>"#,
                "User",
                9_876_543_218_u64,
                "html.injection@example.com",
            ),
            rejected.clone(),
        ),
        Scenario::new(
            22,
            "Handle null values for required fields",
            user(Value::Null, "User", 9_876_543_219_u64, "null.test@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            23,
            "Test with different Content-Type header",
            Step::new(user("Content", "Type", 9_876_543_220_u64, "content.type@example.com"))
                .content_type("application/xml"),
            expect(StatusCode::UNSUPPORTED_MEDIA_TYPE),
        ),
        Scenario::new(
            24,
            "Create users with duplicate first and last names",
            user("John", "Doe", 9_876_543_222_u64, "john.doe2@example.com"),
            created.clone(),
        )
        .with_setup(user("John", "Doe", 9_876_543_221_u64, "john.doe1@example.com")),
        Scenario::new(
            25,
            "Handle phone number with special characters",
            user("Phone", "Special", "987-654-3223", "phone.special@example.com"),
            rejected.clone(),
        ),
        Scenario::new(
            26,
            "Validate email with multiple @ symbols",
            user("Multiple", "At", 9_876_543_224_u64, "multiple@@at.com"),
            rejected.clone(),
        ),
        Scenario::new(
            27,
            "Test with extremely short roll number",
            Step::new(user("Short", "Roll", 9_876_543_225_u64, "short.roll@example.com"))
                .credential("1"),
            rejected.clone(),
        ),
        Scenario::new(
            28,
            "Test with extremely long roll number",
            Step::new(user("Long", "Roll", 9_876_543_226_u64, "long.roll@example.com"))
                .credential("1".repeat(1000)),
            rejected.clone(),
        ),
        Scenario::new(
            29,
            "Handle non-ASCII characters in email address",
            user("NonASCII", "Email", 9_876_543_227_u64, "üser@exämple.com"),
            rejected,
        ),
        Scenario::new(
            30,
            "Send payload with additional unexpected fields",
            user("Extra", "Fields", 9_876_543_228_u64, "extra.fields@example.com")
                .with("unexpectedField", "This is unexpected"),
            created,
        ),
    ]
}
