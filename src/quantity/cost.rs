quantity!(Won, "₩", 0);
