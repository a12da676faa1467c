//! Per-unit rates: multiplying a base quantity by its rate yields the
//! derived quantity, so mismatched conversions do not compile.

quantity!(WonPerKilowattHour, "₩/kWh", 1);

quantity!(KilogramsCo2PerKilowattHour, "kg/kWh", 1);

/// Grid carbon intensity is conventionally quoted in grams.
quantity!(GramsCo2PerKilowattHour, "g/kWh", 0);

quantity!(KilogramsCo2PerKilometer, "kg/km", 3);

quantity!(KilowattHoursPerLiter, "kWh/L", 3);

quantity!(KilowattHoursPerCubicMeter, "kWh/m³", 1);
