//! Shared fixtures for API tests
#![allow(dead_code)]

use rehabkit_api::{Address, Client, CreateUserRequest, Exercise, LoginRequest, Program, User};

/// Test-id generator owned by each test; ids are deterministic within a test.
pub struct TestIds {
    next: u32,
}

impl TestIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}_{}", self.next);
        self.next += 1;
        id
    }

    pub fn email(&mut self, name: &str) -> String {
        let id = self.next;
        self.next += 1;
        format!("{name}_{id}@example.com")
    }
}

pub fn mock_user(ids: &mut TestIds) -> User {
    User {
        id: ids.id("user"),
        email: ids.email("testuser"),
        name: "Test User".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role: "clinician".to_string(),
        ..User::default()
    }
}

pub fn mock_client(ids: &mut TestIds) -> Client {
    Client {
        id: ids.id("client"),
        name: "Test Client".to_string(),
        email: ids.email("testclient"),
        phone: "+1234567890".to_string(),
        gender: "other".to_string(),
        address: Address {
            street: "123 Test Street".to_string(),
            city: "Test City".to_string(),
            state: "TS".to_string(),
            zip_code: "12345".to_string(),
            country: "Test Country".to_string(),
        },
        medical_history: "Test condition".to_string(),
        notes: "Test notes".to_string(),
        ..Client::default()
    }
}

pub fn mock_program(ids: &mut TestIds) -> Program {
    Program {
        id: ids.id("program"),
        name: "Test Program".to_string(),
        description: "A test program".to_string(),
        category: "physical-therapy".to_string(),
        difficulty: "beginner".to_string(),
        duration: 30,
        exercises: vec![Exercise {
            id: ids.id("exercise"),
            name: "Test Exercise".to_string(),
            description: "A test exercise".to_string(),
            duration: 60,
            repetitions: 10,
            sets: 3,
            ..Exercise::default()
        }],
        ..Program::default()
    }
}

pub fn mock_create_user_request(ids: &mut TestIds) -> CreateUserRequest {
    CreateUserRequest {
        email: ids.email("newuser"),
        name: "New User".to_string(),
        first_name: "New".to_string(),
        last_name: "User".to_string(),
        role: "clinician".to_string(),
        password: "SecurePassword123!".to_string(),
    }
}

pub fn mock_login_request(ids: &mut TestIds) -> LoginRequest {
    LoginRequest::new(ids.email("testuser"), "TestPassword123!")
}
