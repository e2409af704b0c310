/// Annotated TrafficLight module used by `--demo` and the tests
pub const DEMO_SPEC: &str = r#"---- MODULE TrafficLight ----
EXTENDS Naturals, TLC

CONSTANTS Cars
VARIABLES light, queue

(* Requirement: The system shall never allow conflicting greens. *)
(* NFR: Average waiting time should be under 40s at peak. *)
(* NFR: Availability >= 99.9% during cruise. *)
(* NFR: Mode change latency should be under 100 ms. *)

Init == /\ light = "R" /\ queue = 0

Next ==
  \/ /\ light = "R" /\ queue' = queue + 1 /\ light' = "G"
  \/ /\ light = "G" /\ queue' = queue - IF queue > 0 THEN 1 ELSE 0 /\ light' = "Y"
  \/ /\ light = "Y" /\ queue' = queue /\ light' = "R"

Spec == Init /\ [][Next]_<<light, queue>>

TypeOK == light \in {"R","Y","G"} /\ queue \in Nat
NoConflict == ~(light = "G" /\ queue > 0 /\ light' = "G")

Invariant == TypeOK /\ NoConflict
THEOREM Spec => []Invariant
===="#;
