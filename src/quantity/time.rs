quantity!(Hours, "h");
