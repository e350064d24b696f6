//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the flight booking
//! system, including API endpoints, business logic and data access. The backend uses
//! Axum as the web framework and SeaORM for database operations. Flight, seat, airport,
//! aircraft, identity, passenger and booking live side by side in one process and share
//! one database.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and the availability cache
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and problem details responses
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, availability cache)
//! - **Startup** (`startup`) - Database connection, migrations and tracing setup
//! - **Router** (`router`) - Axum route table with CORS and request tracing layers
//! - **Util** (`util`) - Date filter parsing and password hashing
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** builds a validated parameter from the DTO, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
