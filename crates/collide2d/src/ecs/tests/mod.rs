//! ECS-level scenario tests
