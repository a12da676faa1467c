quantity!(KilogramsCo2, "kg CO₂e");

quantity!(Tonnes, "t", 1);
