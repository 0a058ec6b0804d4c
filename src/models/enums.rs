// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Closed-set enumerations shared across the API.

use serde::{Deserialize, Serialize};

/// Role of a user in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Driver,
    Parent,
}

/// Status of a ride offer or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Preset locations used for coarse compatibility matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreset {
    Home,
    School,
    SportsClub,
    CommunityCenter,
    Custom,
}

/// Preset time slots used for coarse compatibility matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlotPreset {
    MorningPickup,
    AfternoonDropoff,
    EveningPractice,
    Custom,
}
