mod listener;
