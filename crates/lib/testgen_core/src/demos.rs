//! Built-in demo scenarios for quick test-case generation.

use crate::models::{GenerateTestcaseRequest, TestType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub key: &'static str,
    pub title: &'static str,
    pub test_type: TestType,
    pub description: &'static str,
    pub scenario: &'static str,
    pub tags: &'static [&'static str],
}

impl Demo {
    /// The test-case request this demo sends: requirements only, no document.
    pub fn request(&self) -> GenerateTestcaseRequest {
        GenerateTestcaseRequest {
            test_type: self.test_type,
            requirements_text: Some(self.scenario.to_string()),
            openapi_spec: None,
            priority: None,
        }
    }
}

pub const DEMOS: &[Demo] = &[
    Demo {
        key: "ui_calculator",
        title: "UI: Calculator",
        test_type: TestType::Ui,
        description: "Basic operations of a web calculator",
        scenario: "Calculator test scenario:
1. Open the calculator page
2. Check that all buttons are present (digits, operators, equals, clear)
3. Addition: 5 + 3 = 8
4. Subtraction: 10 - 4 = 6
5. Multiplication: 6 * 7 = 42
6. Division: 20 / 4 = 5
7. Check the clear button (C)
8. Check error handling (division by zero)",
        tags: &["UI", "Playwright", "Allure"],
    },
    Demo {
        key: "api_users",
        title: "API: User management",
        test_type: TestType::Api,
        description: "Full CRUD for a users REST API",
        scenario: "API CRUD test scenario:
1. Create a user (POST /users)
2. List users (GET /users)
3. Get a single user (GET /users/{id})
4. Update a user (PUT /users/{id})
5. Delete a user (DELETE /users/{id})
6. Data validation
7. Edge cases
8. Authentication and authorization checks",
        tags: &["API", "REST", "CRUD", "Authentication"],
    },
    Demo {
        key: "api_auth",
        title: "API: Authentication and JWT",
        test_type: TestType::Api,
        description: "Authentication flow with JWT tokens",
        scenario: "Authentication test scenario:
1. Register a new user
2. Log in with valid credentials
3. Receive and verify the JWT token
4. Access a protected endpoint with the token
5. Refresh the token
6. Log out and invalidate the token
7. Invalid tokens
8. Token lifetime",
        tags: &["API", "JWT", "Authentication", "Security"],
    },
    Demo {
        key: "ui_ecommerce",
        title: "UI: Online store",
        test_type: TestType::Ui,
        description: "Main user journeys of an online store",
        scenario: "Online store test scenario:
1. Browse the product catalog
2. Filter and sort products
3. Search for products
4. Add a product to the cart
5. Place an order
6. Sign up and log in
7. Check order history
8. Responsive layout",
        tags: &["UI", "E-commerce", "Playwright", "Responsive"],
    },
];

pub fn find(key: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.key == key)
}
