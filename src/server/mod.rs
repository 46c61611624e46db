//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, authorization, business
//! rules, data access and startup plumbing. The backend uses Axum as the web framework
//! and SeaORM over Sqlite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, unit of work, and DTO conversion
//! - **Service Layer** (`service/`) - Ownership checks, caps, cascades, dice rolling and auth
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer authentication guard and rate limiting
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token signer, dice roller)
//! - **Startup** (`startup`) - Database connection, migrations, catalog seeding and CORS
//! - **Router** (`router`) - Axum route configuration with per-route rate limits
//! - **Doc** (`doc`) - OpenAPI document served through Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** applies the route's rate limit and dispatches to a controller
//! 2. **Controller** opens a transaction and resolves the principal from the bearer token
//! 3. **Controller** validates the request DTO and converts it to params
//! 4. **Service** enforces ownership and caps, orchestrating data operations
//! 5. **Data** queries the database inside the same transaction
//! 6. **Controller** commits, converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
