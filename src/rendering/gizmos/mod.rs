pub mod gizmos;
